use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to the JDX API or driving a file through it.
#[derive(Debug, Error)]
pub enum JdxError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The call succeeded at the HTTP level but the payload is not what the
    /// next step expects (e.g. no pipeline ID, health code != 200).
    #[error("Unexpected response from {endpoint}: {detail}")]
    UnexpectedResponse {
        endpoint: &'static str,
        detail: String,
    },

    /// A step cannot run because an earlier step did not produce its input.
    #[error("Cannot run {step}: no {missing} available from an earlier step")]
    MissingPrerequisite {
        step: &'static str,
        missing: &'static str,
    },

    #[error("Provided file is not a file or a directory: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl JdxError {
    pub fn unexpected(endpoint: &'static str, detail: impl Into<String>) -> Self {
        JdxError::UnexpectedResponse {
            endpoint,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_status() {
        let err = JdxError::Api {
            status: 422,
            message: "pipelineID is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 422): pipelineID is required"
        );
    }

    #[test]
    fn test_missing_prerequisite_names_step_and_input() {
        let err = JdxError::MissingPrerequisite {
            step: "match table",
            missing: "pipeline ID",
        };
        assert_eq!(
            err.to_string(),
            "Cannot run match table: no pipeline ID available from an earlier step"
        );
    }

    #[test]
    fn test_invalid_path_displays_path() {
        let err = JdxError::InvalidPath(PathBuf::from("./nowhere"));
        assert!(err.to_string().ends_with("./nowhere"));
    }
}
