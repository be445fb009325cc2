use indexmap::IndexMap;
use log::debug;

use crate::auth::Token;
use crate::error::ConfigError;

pub const ORGANIZATION_INPUT: &str = "INPUT_ADO-ORGANIZATION";
pub const PROJECT_INPUT: &str = "INPUT_ADO-PROJECT";
pub const PIPELINE_ID_INPUT: &str = "INPUT_ADO-PIPELINE-ID";
pub const PAT_INPUT: &str = "INPUT_ADO-PAT";
pub const REF_NAME_INPUT: &str = "INPUT_ADO-REF-NAME";
pub const VARIABLES_INPUT: &str = "INPUT_PIPELINE-VARIABLES";
pub const PARAMETERS_INPUT: &str = "INPUT_PIPELINE-PARAMETERS";

const DEFAULT_REF_NAME: &str = "refs/heads/main";
const REF_PREFIX: &str = "refs/";
const BRANCH_PREFIX: &str = "refs/heads/";

/// Everything needed to queue a single pipeline run.
///
/// Built once from the action inputs and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub organization: String,
    pub project: String,
    pub pipeline_id: String,
    pub token: Token,
    /// Always starts with `refs/`.
    pub ref_name: String,
    pub variables: IndexMap<String, String>,
    pub parameters: IndexMap<String, String>,
}

impl PipelineConfig {
    /// Builds the configuration from every `INPUT_*` variable in the
    /// process environment.
    ///
    /// # Errors
    ///
    /// See [`PipelineConfig::build_with`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_inputs(|name| std::env::var(name).ok())
    }

    /// Resolves required and optional inputs through `lookup`.
    ///
    /// `INPUT_PIPELINE-VARIABLES` becomes `variables` and
    /// `INPUT_PIPELINE-PARAMETERS` becomes `parameters`. Unset optional
    /// inputs are treated as empty.
    ///
    /// # Errors
    ///
    /// See [`PipelineConfig::build_with`].
    pub fn from_inputs<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).unwrap_or_default();
        let variables_json = optional(VARIABLES_INPUT);
        let parameters_json = optional(PARAMETERS_INPUT);
        let ref_name = optional(REF_NAME_INPUT);

        Self::build_with(&lookup, &variables_json, &parameters_json, &ref_name)
    }

    /// Builds the configuration, resolving required inputs through `lookup`.
    ///
    /// An input that is unset or empty counts as missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of organization, project, pipeline id or token is missing
    /// - `variables_json` or `parameters_json` is non-empty and not a JSON
    ///   object of string values
    pub fn build_with<F>(
        lookup: F,
        variables_json: &str,
        parameters_json: &str,
        ref_name: &str,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let organization = read(ORGANIZATION_INPUT);
        let project = read(PROJECT_INPUT);
        let pipeline_id = read(PIPELINE_ID_INPUT);
        let token = read(PAT_INPUT);

        let (Some(organization), Some(project), Some(pipeline_id), Some(token)) =
            (&organization, &project, &pipeline_id, &token)
        else {
            let missing = [
                ("ado-organization", organization.is_none()),
                ("ado-project", project.is_none()),
                ("ado-pipeline-id", pipeline_id.is_none()),
                ("ado-pat", token.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(ConfigError::MissingRequiredInput(missing));
        };

        let variables =
            parse_string_map(variables_json).map_err(ConfigError::InvalidVariablesJson)?;
        let parameters =
            parse_string_map(parameters_json).map_err(ConfigError::InvalidParametersJson)?;

        debug!(
            "Parsed {} variables and {} template parameters",
            variables.len(),
            parameters.len()
        );

        Ok(Self {
            organization: organization.clone(),
            project: project.clone(),
            pipeline_id: pipeline_id.clone(),
            token: Token::from(token.as_str()),
            ref_name: normalize_ref_name(ref_name),
            variables,
            parameters,
        })
    }
}

/// Turns a branch name into a fully qualified ref.
///
/// Empty input falls back to `refs/heads/main`; anything already under
/// `refs/` is kept as is.
pub fn normalize_ref_name(ref_name: &str) -> String {
    if ref_name.is_empty() {
        DEFAULT_REF_NAME.to_string()
    } else if ref_name.starts_with(REF_PREFIX) {
        ref_name.to_string()
    } else {
        format!("{BRANCH_PREFIX}{ref_name}")
    }
}

fn parse_string_map(raw: &str) -> Result<IndexMap<String, String>, serde_json::Error> {
    if raw.is_empty() {
        return Ok(IndexMap::new());
    }
    serde_json::from_str(raw)
}
