//! Per-file driver: walks one job description through the JDX pipeline.
//!
//! Step order: health → upload file → [preview] → [score] → upload context →
//! framework recommendations → framework selections → match table →
//! user actions → [score] → generate file.
//!
//! A failing step is reported and the run moves on. A step whose input was
//! never produced (no pipeline ID, no framework, no match table) aborts the
//! file with `JdxError::MissingPrerequisite`.

use std::path::Path;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::actions::convert_match_table_to_user_actions;
use crate::errors::JdxError;
use crate::jdx_client::{endpoints, JdxApi};
use crate::models::context::JobDescriptionContextRequest;
use crate::models::framework::FrameworkSelectionRequest;
use crate::models::match_table::{
    MatchTableEntry, MatchTableRequest, MatchTableSelection, UserActionRequest,
};
use crate::models::pipeline::Request;
use crate::report;

/// Knobs for a single pass over a file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Used instead of the top recommended framework when set.
    pub framework_override: Option<Uuid>,
    pub with_preview: bool,
    pub with_score: bool,
}

/// What a finished file run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub pipeline_id: Option<String>,
    pub framework: Option<String>,
    pub actions_submitted: usize,
    pub generated: bool,
    /// Steps that failed without aborting the run.
    pub failed_steps: Vec<&'static str>,
}

pub struct FileRun<'a, A: JdxApi + ?Sized> {
    api: &'a A,
    file: &'a Path,
    options: &'a RunOptions,
    pipeline_id: Option<String>,
    framework_selection: Option<String>,
    match_table: Option<Vec<MatchTableEntry>>,
    summary: RunSummary,
    /// Titles of the steps that got as far as printing their header.
    titles: Vec<&'static str>,
}

impl<'a, A: JdxApi + ?Sized> FileRun<'a, A> {
    pub fn new(api: &'a A, file: &'a Path, options: &'a RunOptions) -> Self {
        Self {
            api,
            file,
            options,
            pipeline_id: None,
            framework_selection: None,
            match_table: None,
            summary: RunSummary::default(),
            titles: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn titles(&self) -> &[&'static str] {
        &self.titles
    }

    pub async fn go(&mut self) -> Result<RunSummary, JdxError> {
        let r = self.health().await;
        self.settle("health", r)?;

        let r = self.upload_file().await;
        self.settle("upload file", r)?;

        if self.options.with_preview {
            let r = self.preview().await;
            self.settle("preview", r)?;
        }

        if self.options.with_score {
            let r = self.get_score().await;
            self.settle("get score", r)?;
        }

        let r = self.upload_context().await;
        self.settle("upload context", r)?;

        let r = self.framework_recommendations().await;
        self.settle("framework recommendations", r)?;

        let r = self.framework_selections().await;
        self.settle("framework selections", r)?;

        let r = self.fetch_match_table().await;
        self.settle("match table", r)?;

        let r = self.user_actions().await;
        self.settle("user actions", r)?;

        if self.options.with_score {
            let r = self.get_score().await;
            self.settle("get score", r)?;
        }

        let r = self.generate_file().await;
        self.settle("generate file", r)?;

        Ok(std::mem::take(&mut self.summary))
    }

    /// Reports a failed step and swallows it, unless the failure is a missing
    /// prerequisite, which ends the run.
    fn settle(&mut self, step: &'static str, result: Result<(), JdxError>) -> Result<(), JdxError> {
        let outcome = match result {
            Ok(()) => Ok(()),
            Err(e @ JdxError::MissingPrerequisite { .. }) => Err(e),
            Err(e) => {
                println!("Exception when calling {step}: {e}");
                error!("{} failed for {}: {e}", step, self.file.display());
                self.summary.failed_steps.push(step);
                Ok(())
            }
        };
        report::print_empty_lines(1);
        outcome
    }

    fn begin(&mut self, title: &'static str) {
        report::print_title(title);
        self.titles.push(title);
    }

    fn require_pipeline_id(&self, step: &'static str) -> Result<String, JdxError> {
        self.pipeline_id
            .clone()
            .ok_or(JdxError::MissingPrerequisite {
                step,
                missing: "pipeline ID",
            })
    }

    async fn health(&mut self) -> Result<(), JdxError> {
        self.begin("HEALTH");
        let resp = self.api.health().await?;
        report::print_response(&resp);

        if resp.status != 200 || resp.data.api != Some(200) {
            return Err(JdxError::unexpected(
                endpoints::HEALTH,
                format!("status {}, api code {:?}", resp.status, resp.data.api),
            ));
        }
        Ok(())
    }

    async fn upload_file(&mut self) -> Result<(), JdxError> {
        self.begin("UPLOAD FILE");
        let resp = self.api.upload_job_description_file(self.file).await?;
        report::print_response(&resp);

        let pipeline_id = resp
            .data
            .pipeline_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| JdxError::unexpected(endpoints::UPLOAD_FILE, "no pipelineID returned"))?;

        info!("{} → pipeline {}", self.file.display(), pipeline_id);
        self.summary.pipeline_id = Some(pipeline_id.clone());
        self.pipeline_id = Some(pipeline_id);
        Ok(())
    }

    async fn preview(&mut self) -> Result<(), JdxError> {
        let request = Request::new(self.require_pipeline_id("preview")?);
        self.begin("PREVIEW");
        let resp = self.api.preview(&request).await?;
        report::print_response(&resp);
        Ok(())
    }

    async fn get_score(&mut self) -> Result<(), JdxError> {
        let request = Request::new(self.require_pipeline_id("get score")?);
        self.begin("GET SCORE");
        let resp = self.api.get_score(&request).await?;
        report::print_response(&resp);
        Ok(())
    }

    async fn upload_context(&mut self) -> Result<(), JdxError> {
        let request =
            JobDescriptionContextRequest::sample(self.require_pipeline_id("upload context")?);
        self.begin("UPLOAD CONTEXT");
        let resp = self.api.upload_job_description_context(&request).await?;
        report::print_response(&resp);

        match resp.data.salary_currency.as_deref() {
            Some(currency) => info!("Context accepted (salary currency: {currency})"),
            None => warn!("Context response did not echo a salary currency"),
        }
        Ok(())
    }

    async fn framework_recommendations(&mut self) -> Result<(), JdxError> {
        let request = Request::new(self.require_pipeline_id("framework recommendations")?);
        self.begin("FRAMEWORK RECOMMENDATIONS");
        println!("{}", report::to_pretty_json(&request));
        let resp = self.api.framework_recommendations(&request).await?;
        report::print_response(&resp);

        match resp.data.top() {
            Some(top) => {
                info!(
                    "Top recommended framework: {} ({}, match {:?})",
                    top.framework_data.uuid,
                    top.framework_data.name.as_deref().unwrap_or("unnamed"),
                    top.match_percentage
                );
                self.framework_selection = Some(top.framework_data.uuid.clone());
                Ok(())
            }
            None => Err(JdxError::unexpected(
                endpoints::FRAMEWORK_RECOMMENDATIONS,
                "no frameworks recommended",
            )),
        }
    }

    async fn framework_selections(&mut self) -> Result<(), JdxError> {
        let pipeline_id = self.require_pipeline_id("framework selections")?;
        let framework = self
            .options
            .framework_override
            .map(|uuid| uuid.to_string())
            .or_else(|| self.framework_selection.clone())
            .ok_or(JdxError::MissingPrerequisite {
                step: "framework selections",
                missing: "framework recommendation",
            })?;
        self.begin("FRAMEWORK SELECTIONS");

        let request = FrameworkSelectionRequest::single(pipeline_id, framework.clone());
        let resp = self.api.framework_selections(&request).await?;
        report::print_response(&resp);

        self.summary.framework = Some(framework);
        Ok(())
    }

    async fn fetch_match_table(&mut self) -> Result<(), JdxError> {
        let request = MatchTableRequest {
            pipeline_id: self.require_pipeline_id("match table")?,
        };
        self.begin("MATCH TABLE");
        let resp = self.api.match_table(&request).await?;
        report::print_response(&resp);

        info!("Match table has {} entries", resp.data.match_table.len());
        self.match_table = Some(resp.data.match_table);
        Ok(())
    }

    async fn user_actions(&mut self) -> Result<(), JdxError> {
        let pipeline_id = self.require_pipeline_id("user actions")?;
        let table = self
            .match_table
            .as_deref()
            .ok_or(JdxError::MissingPrerequisite {
                step: "user actions",
                missing: "match table",
            })?;

        let match_table_selections: Vec<MatchTableSelection> =
            convert_match_table_to_user_actions(table)
                .into_iter()
                .map(Into::into)
                .collect();
        let submitted = match_table_selections.len();
        self.begin("USER ACTIONS");

        let request = UserActionRequest {
            pipeline_id,
            match_table_selections,
        };
        let resp = self.api.user_actions(&request).await?;
        report::print_response(&resp);

        self.summary.actions_submitted = submitted;
        Ok(())
    }

    async fn generate_file(&mut self) -> Result<(), JdxError> {
        let request = Request::new(self.require_pipeline_id("generate file")?);
        self.begin("GENERATE FILE");
        let resp = self.api.generate_job_schema_plus(&request).await?;
        report::print_response(&resp);

        self.summary.generated = true;
        Ok(())
    }
}
