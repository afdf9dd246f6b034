//! JDX Client — the single point of entry for all calls to the JDX REST API.
//!
//! Every call returns the whole HTTP exchange (status, headers, raw JSON body)
//! alongside the typed fields the driver needs, so responses can be dumped
//! for manual inspection exactly as the service sent them.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::JdxError;
use crate::models::context::{JobDescriptionContextRequest, JobDescriptionContextResponse};
use crate::models::framework::{FrameworkRecommendationResponse, FrameworkSelectionRequest};
use crate::models::match_table::{MatchTableRequest, MatchTableResponse, UserActionRequest};
use crate::models::pipeline::{HealthResponse, Request, UploadResponse};

pub mod endpoints;

/// A completed exchange with the JDX API.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// The body exactly as received; `Value::Null` when the body was empty.
    pub body: Value,
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The JDX API surface used by the end-to-end run.
///
/// `JdxClient` talks to the real service; tests drive the pipeline through
/// an in-memory implementation.
#[async_trait]
pub trait JdxApi: Send + Sync {
    async fn health(&self) -> Result<ApiResponse<HealthResponse>, JdxError>;

    async fn upload_job_description_file(
        &self,
        path: &Path,
    ) -> Result<ApiResponse<UploadResponse>, JdxError>;

    async fn upload_job_description_context(
        &self,
        request: &JobDescriptionContextRequest,
    ) -> Result<ApiResponse<JobDescriptionContextResponse>, JdxError>;

    async fn preview(&self, request: &Request) -> Result<ApiResponse<Value>, JdxError>;

    async fn get_score(&self, request: &Request) -> Result<ApiResponse<Value>, JdxError>;

    async fn framework_recommendations(
        &self,
        request: &Request,
    ) -> Result<ApiResponse<FrameworkRecommendationResponse>, JdxError>;

    async fn framework_selections(
        &self,
        request: &FrameworkSelectionRequest,
    ) -> Result<ApiResponse<Value>, JdxError>;

    async fn match_table(
        &self,
        request: &MatchTableRequest,
    ) -> Result<ApiResponse<MatchTableResponse>, JdxError>;

    async fn user_actions(
        &self,
        request: &UserActionRequest,
    ) -> Result<ApiResponse<Value>, JdxError>;

    async fn generate_job_schema_plus(
        &self,
        request: &Request,
    ) -> Result<ApiResponse<Value>, JdxError>;
}

/// reqwest-backed client for a hosted JDX instance.
#[derive(Clone)]
pub struct JdxClient {
    client: Client,
    base_url: String,
}

impl JdxClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, JdxError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, JdxError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(path, self.client.post(self.url(path)).json(body))
            .await
    }

    /// Sends the request and splits the response into status, headers and body.
    /// Any non-2xx status is turned into `JdxError::Api`.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, JdxError> {
        debug!("JDX request: {}{}", self.base_url, path);

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(JdxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        let data = T::deserialize(&body)?;

        debug!("JDX response: {} {}", status.as_u16(), path);

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            body,
            data,
        })
    }
}

#[async_trait]
impl JdxApi for JdxClient {
    async fn health(&self) -> Result<ApiResponse<HealthResponse>, JdxError> {
        self.execute(endpoints::HEALTH, self.client.get(self.url(endpoints::HEALTH)))
            .await
    }

    async fn upload_job_description_file(
        &self,
        path: &Path,
    ) -> Result<ApiResponse<UploadResponse>, JdxError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "job_description".to_string());
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        self.execute(
            endpoints::UPLOAD_FILE,
            self.client
                .post(self.url(endpoints::UPLOAD_FILE))
                .multipart(form),
        )
        .await
    }

    async fn upload_job_description_context(
        &self,
        request: &JobDescriptionContextRequest,
    ) -> Result<ApiResponse<JobDescriptionContextResponse>, JdxError> {
        self.post_json(endpoints::UPLOAD_CONTEXT, request).await
    }

    async fn preview(&self, request: &Request) -> Result<ApiResponse<Value>, JdxError> {
        self.post_json(endpoints::PREVIEW, request).await
    }

    async fn get_score(&self, request: &Request) -> Result<ApiResponse<Value>, JdxError> {
        self.post_json(endpoints::GET_SCORE, request).await
    }

    async fn framework_recommendations(
        &self,
        request: &Request,
    ) -> Result<ApiResponse<FrameworkRecommendationResponse>, JdxError> {
        self.post_json(endpoints::FRAMEWORK_RECOMMENDATIONS, request)
            .await
    }

    async fn framework_selections(
        &self,
        request: &FrameworkSelectionRequest,
    ) -> Result<ApiResponse<Value>, JdxError> {
        self.post_json(endpoints::FRAMEWORK_SELECTIONS, request)
            .await
    }

    async fn match_table(
        &self,
        request: &MatchTableRequest,
    ) -> Result<ApiResponse<MatchTableResponse>, JdxError> {
        self.post_json(endpoints::MATCH_TABLE, request).await
    }

    async fn user_actions(
        &self,
        request: &UserActionRequest,
    ) -> Result<ApiResponse<Value>, JdxError> {
        self.post_json(endpoints::USER_ACTIONS, request).await
    }

    async fn generate_job_schema_plus(
        &self,
        request: &Request,
    ) -> Result<ApiResponse<Value>, JdxError> {
        self.post_json(endpoints::GENERATE_JOB_SCHEMA_PLUS, request)
            .await
    }
}
