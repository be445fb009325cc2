mod azure_devops;

pub use azure_devops::{AzureDevOpsClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
