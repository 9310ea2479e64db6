use serde::{Deserialize, Serialize};

use crate::{DownloadRequest, FetchError, FetchOutput};

/// Message sent from the page context across the privilege boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum BoundaryRequest {
    #[serde(rename = "fetchFileDirectly")]
    FetchFileDirectly {
        #[serde(rename = "fileId")]
        file_id: String,
        #[serde(rename = "fileName")]
        file_name: String,
    },
}

impl BoundaryRequest {
    pub fn from_request(request: &DownloadRequest) -> Self {
        Self::FetchFileDirectly {
            file_id: request.file_id.clone(),
            file_name: request.file_name.clone(),
        }
    }

    pub fn into_download_request(self) -> DownloadRequest {
        match self {
            Self::FetchFileDirectly { file_id, file_name } => DownloadRequest {
                file_id,
                file_name,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Reply sent back to the page context. Exactly one variant per request;
/// the failure shape is shared by network, status, and conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryResponse {
    Success {
        #[serde(rename = "dataUrl")]
        data_url: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    Failure { error: String },
}

impl BoundaryResponse {
    pub fn from_result(result: &Result<FetchOutput, FetchError>) -> Self {
        match result {
            Ok(output) => Self::Success {
                data_url: output.payload.data_url.clone(),
                mime_type: output.payload.mime_type.clone(),
            },
            Err(err) => Self::Failure {
                error: err.message.clone(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
