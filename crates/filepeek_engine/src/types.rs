use std::fmt;

pub type RequestId = u64;

/// A fetch request as it arrives over the privilege boundary. Both fields
/// are non-empty by the page-context extraction contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_id: String,
    pub file_name: String,
}

/// Transport-safe encoding of the fetched bytes: a `data:` URL embedding the
/// media type, directly usable as a rendering element's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPayload {
    pub data_url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub payload: TransportPayload,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    /// Full download URL the request went to.
    pub url: String,
    pub status: u16,
    pub byte_len: u64,
    /// `Content-Type` header as declared by the server, when present.
    pub declared_content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Exactly one per request: the fetch result, after payload conversion.
    FetchCompleted {
        request_id: RequestId,
        result: Result<FetchOutput, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Conversion,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Conversion => write!(f, "payload conversion failed"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
