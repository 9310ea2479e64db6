//! Filepeek engine: privileged-context IO pipeline.
//!
//! Scans document snapshots for download controls, performs authenticated
//! fetches against the portal's download endpoint, converts the bytes into a
//! transport-safe data URL, and answers each boundary request with exactly
//! one result.
mod boundary;
mod encode;
mod endpoint;
mod engine;
mod fetch;
mod scan;
mod types;

pub use boundary::{BoundaryRequest, BoundaryResponse};
pub use encode::{to_data_url, EncodeError};
pub use endpoint::{DownloadEndpoint, DEFAULT_DOWNLOAD_ENDPOINT};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, FileFetcher, ReqwestFetcher};
pub use scan::{scan_document, DiscoveredControl, DOWNLOAD_CONTROL_SELECTOR};
pub use types::{
    DownloadRequest, EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId,
    TransportPayload,
};
