use indexmap::IndexMap;
use serde::Serialize;

use crate::config::PipelineConfig;

/// Repository alias Azure DevOps uses for the pipeline's own repository.
const SELF_REPOSITORY: &str = "self";

/// Body of `POST {org}/{project}/_apis/pipelines/{id}/runs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPipelineRequest {
    /// Repository resources to build
    pub resources: RunResources,
    /// Run-time variables
    pub variables: IndexMap<String, String>,
    /// Values for the pipeline's template parameters
    pub template_parameters: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResources {
    pub repositories: IndexMap<String, RepositoryResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResource {
    /// Fully qualified ref, e.g. `refs/heads/main`
    pub ref_name: String,
}

impl From<&PipelineConfig> for RunPipelineRequest {
    fn from(config: &PipelineConfig) -> Self {
        let mut repositories = IndexMap::new();
        repositories.insert(
            SELF_REPOSITORY.to_string(),
            RepositoryResource {
                ref_name: config.ref_name.clone(),
            },
        );

        Self {
            resources: RunResources { repositories },
            variables: config.variables.clone(),
            template_parameters: config.parameters.clone(),
        }
    }
}
