use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::config::PipelineConfig;
use crate::output::{self, TriggerProgress};
use crate::providers::{AzureDevOpsClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};

/// All inputs arrive through `INPUT_*` environment variables set by the CI runner.
#[derive(Parser)]
#[command(name = "ado-trigger")]
#[command(version, about = "Triggers an Azure DevOps pipeline run", long_about = None)]
pub struct Cli {}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let config =
            PipelineConfig::from_env().context("failed to create pipeline configuration")?;

        info!(
            "Loaded configuration for {}/{} pipeline {}",
            config.organization, config.project, config.pipeline_id
        );

        let client = AzureDevOpsClient::new(DEFAULT_BASE_URL, config.token.clone(), REQUEST_TIMEOUT)
            .context("failed to trigger pipeline")?;

        let progress = TriggerProgress::start(&config.pipeline_id);
        if let Err(e) = client.run_pipeline(&config).await {
            progress.fail();
            return Err(e).context("failed to trigger pipeline");
        }
        progress.succeed();

        output::print_success();
        Ok(())
    }
}
