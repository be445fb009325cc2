use log::{debug, info};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{redirect, Client};
use std::time::Duration;
use url::Url;

use crate::auth::Token;
use crate::config::PipelineConfig;
use crate::error::TriggerError;

use super::types::RunPipelineRequest;

pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_VERSION: &str = "7.0";

/// Azure DevOps REST client for queuing pipeline runs.
pub struct AzureDevOpsClient {
    client: Client,
    base_url: Url,
    token: Token,
}

impl AzureDevOpsClient {
    /// Creates a client that authenticates with `token`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Azure DevOps services URL (e.g., <https://dev.azure.com>)
    /// * `token` - Personal access token sent as the Basic auth password
    /// * `timeout` - Upper bound for the whole request/response exchange
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or `base_url` is
    /// not an absolute hierarchical URL.
    pub fn new(base_url: &str, token: Token, timeout: Duration) -> Result<Self, TriggerError> {
        let client = Client::builder()
            .user_agent(concat!("ado-trigger/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| TriggerError::ClientSetup(format!("failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| TriggerError::ClientSetup(format!("invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TriggerError::ClientSetup(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Builds `{base}/{org}/{project}/_apis/pipelines/{id}/runs?api-version=7.0`.
    ///
    /// Path segments are percent-encoded. `.` and `..` are rejected since the
    /// URL parser would resolve them away and target another endpoint.
    pub fn runs_url(&self, config: &PipelineConfig) -> Result<Url, TriggerError> {
        for (name, segment) in [
            ("organization", &config.organization),
            ("project", &config.project),
            ("pipeline id", &config.pipeline_id),
        ] {
            if segment == "." || segment == ".." {
                return Err(TriggerError::ClientSetup(format!(
                    "{name} cannot be {segment:?}"
                )));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TriggerError::ClientSetup(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend([
                config.organization.as_str(),
                config.project.as_str(),
                "_apis",
                "pipelines",
                config.pipeline_id.as_str(),
                "runs",
            ]);
        url.set_query(Some(&format!("api-version={API_VERSION}")));
        Ok(url)
    }

    /// Queues one run of the configured pipeline.
    ///
    /// Any 2xx response is success; the response body is drained and
    /// discarded. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request body cannot be serialized
    /// - The request fails at the transport level or times out
    /// - Azure DevOps answers with a non-2xx status
    pub async fn run_pipeline(&self, config: &PipelineConfig) -> Result<(), TriggerError> {
        let body = serde_json::to_vec(&RunPipelineRequest::from(config))?;
        let url = self.runs_url(config)?;

        info!(
            "Triggering pipeline {} in {}/{} on {}",
            config.pipeline_id, config.organization, config.project, config.ref_name
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .basic_auth("", Some(self.token.as_str()))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let drained = response.bytes().await.map_or(0, |bytes| bytes.len());
        debug!("Azure DevOps responded with {status} ({drained} bytes)");

        if !status.is_success() {
            return Err(TriggerError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        Ok(())
    }
}
