use thiserror::Error;

/// Failures while assembling a [`crate::config::PipelineConfig`] from action inputs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required inputs: {}", .0.join(", "))]
    MissingRequiredInput(Vec<&'static str>),

    #[error("failed to parse pipeline variables JSON: {0}")]
    InvalidVariablesJson(#[source] serde_json::Error),

    #[error("failed to parse pipeline parameters JSON: {0}")]
    InvalidParametersJson(#[source] serde_json::Error),
}

/// Failures while sending the run request to Azure DevOps.
#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("failed to serialize request body: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    ClientSetup(String),

    #[error("failed to execute request: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("pipeline trigger failed with status: {code}")]
    UnexpectedStatus { code: u16 },
}
