use url::Url;

use crate::{DownloadRequest, FailureKind, FetchError};

/// Compiled-in endpoint of the portal's file-download servlet.
pub const DEFAULT_DOWNLOAD_ENDPOINT: &str = "https://portal.it-chiba.ac.jp/uprx/filedownload";

/// Fixed classification parameter the servlet expects on every request.
const CLASSIFICATION_KBN: &str = "9";

/// Endpoint template for download URLs:
/// `<base>?fileId=<id>&fileName=<urlencoded name>&kbn=9`.
#[derive(Debug, Clone)]
pub struct DownloadEndpoint {
    base: Url,
}

impl DownloadEndpoint {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self { base })
    }

    /// The portal endpoint baked into the build.
    pub fn portal_default() -> Self {
        Self {
            base: Url::parse(DEFAULT_DOWNLOAD_ENDPOINT).expect("compiled-in endpoint is valid"),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Builds the download URL for a request. The file name is
    /// percent-encoded by the query serializer.
    pub fn download_url(&self, request: &DownloadRequest) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("fileId", &request.file_id)
            .append_pair("fileName", &request.file_name)
            .append_pair("kbn", CLASSIFICATION_KBN);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::{DownloadEndpoint, DEFAULT_DOWNLOAD_ENDPOINT};
    use crate::DownloadRequest;

    fn request(file_id: &str, file_name: &str) -> DownloadRequest {
        DownloadRequest {
            file_id: file_id.to_string(),
            file_name: file_name.to_string(),
        }
    }

    #[test]
    fn builds_templated_query() {
        let endpoint = DownloadEndpoint::new("https://portal.example/filedownload").unwrap();
        let url = endpoint.download_url(&request("dlBtn", "report.pdf"));
        assert_eq!(
            url.as_str(),
            "https://portal.example/filedownload?fileId=dlBtn&fileName=report.pdf&kbn=9"
        );
    }

    #[test]
    fn encodes_non_ascii_file_names() {
        let endpoint = DownloadEndpoint::new("https://portal.example/filedownload").unwrap();
        let url = endpoint.download_url(&request("1", "工事.pdf"));
        let query = url.query().unwrap();
        assert!(query.contains("fileName=%E5%B7%A5%E4%BA%8B.pdf"));
        assert!(query.ends_with("kbn=9"));
    }

    #[test]
    fn default_endpoint_parses() {
        let endpoint = DownloadEndpoint::portal_default();
        assert_eq!(endpoint.base().as_str(), DEFAULT_DOWNLOAD_ENDPOINT);
    }

    #[test]
    fn invalid_base_is_reported() {
        let err = DownloadEndpoint::new("not a url").unwrap_err();
        assert_eq!(err.kind, crate::FailureKind::InvalidUrl);
    }
}
