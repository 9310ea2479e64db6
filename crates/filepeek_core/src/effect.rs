use crate::extract::DownloadRequest;
use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a fetch request across the privilege boundary and register a
    /// single-shot response handler for `request_id`.
    FetchFile {
        request_id: RequestId,
        request: DownloadRequest,
    },
    /// Tell the user the preview failed and a standard download may occur.
    /// No native-download fallback is attempted.
    NotifyPreviewFailed { detail: String },
    /// Tell the user the fetched file's format cannot be previewed.
    NotifyUnsupportedFormat { mime_type: String },
}
