use std::sync::Arc;
use std::time::Duration;

use engine_logging::engine_debug;
use futures_util::StreamExt;
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;

use crate::encode;
use crate::endpoint::DownloadEndpoint;
use crate::{
    DownloadRequest, FailureKind, FetchError, FetchMetadata, FetchOutput, TransportPayload,
};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Attach the session cookie jar to the outbound request. The portal
    /// authenticates purely through ambient session cookies; nothing is
    /// passed in the request body.
    pub include_credentials: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 20 * 1024 * 1024,
            include_credentials: true,
        }
    }
}

/// One authenticated fetch per request; no retry, no caching.
#[async_trait::async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch_file(&self, request: &DownloadRequest) -> Result<FetchOutput, FetchError>;
}

#[derive(Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    endpoint: DownloadEndpoint,
    cookies: Arc<Jar>,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings, endpoint: DownloadEndpoint) -> Self {
        Self {
            settings,
            endpoint,
            cookies: Arc::new(Jar::default()),
        }
    }

    /// Seeds the jar with a session cookie for the endpoint's origin, e.g.
    /// `"JSESSIONID=abc123"`.
    pub fn add_session_cookie(&self, cookie: &str) {
        self.cookies.add_cookie_str(cookie, self.endpoint.base());
    }

    pub fn endpoint(&self) -> &DownloadEndpoint {
        &self.endpoint
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout);
        if self.settings.include_credentials {
            builder = builder.cookie_provider(self.cookies.clone());
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl FileFetcher for ReqwestFetcher {
    async fn fetch_file(&self, request: &DownloadRequest) -> Result<FetchOutput, FetchError> {
        let url = self.endpoint.download_url(request);
        let client = self.build_client()?;
        engine_debug!("GET {url}");

        let response = client.get(url.clone()).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("file download failed: {status}"),
            ));
        }

        let declared_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let mime_type = declared_content_type
            .clone()
            .unwrap_or_else(|| default_media_type(&request.file_name));

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        // Conversion runs only after the response is deemed successful, and
        // its failures surface as results, same as network errors.
        let data_url = encode::to_data_url(&bytes, &mime_type)
            .map_err(|err| FetchError::new(FailureKind::Conversion, err.to_string()))?;

        Ok(FetchOutput {
            payload: TransportPayload {
                data_url,
                mime_type,
            },
            metadata: FetchMetadata {
                url: url.to_string(),
                status: status.as_u16(),
                byte_len: bytes.len() as u64,
                declared_content_type,
            },
        })
    }
}

/// Media type when the server declares none: PDF for `.pdf` names, generic
/// binary otherwise.
fn default_media_type(file_name: &str) -> String {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        "application/pdf".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
