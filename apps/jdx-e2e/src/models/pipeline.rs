use serde::{Deserialize, Serialize};

/// The bare request body most endpoints take: just the pipeline to act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,
}

impl Request {
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
        }
    }
}

/// GET /health
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Status code the service reports for itself; 200 when healthy.
    pub api: Option<u16>,
}

/// POST /upload-job-description-file
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: Option<String>,
}
