//! Output formatter trait for CLI results.

use anyhow::Result;
use coldvault_core::DeletionReport;
use coldvault_core::Inventory;
use coldvault_core::JobDescriptor;
use coldvault_core::Vault;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the vaults of a complete listing
    fn format_vaults(&self, vaults: &[Vault]) -> Result<()>;

    /// Format the vaults listed before the listing failed
    fn format_partial_vaults(&self, vaults: &[Vault], error: &anyhow::Error) -> Result<()>;

    /// Format a newly initiated inventory-retrieval job
    fn format_job_started(&self, vault_name: &str, job: &JobDescriptor) -> Result<()>;

    /// Format a decoded inventory
    fn format_inventory(&self, inventory: &Inventory) -> Result<()>;

    /// Format the outcome of a deletion batch
    fn format_deletion_report(&self, vault_name: &str, report: &DeletionReport) -> Result<()>;

    /// Format an unrecognized action together with the accepted ones
    fn format_unknown_action(&self, action: &str, valid_actions: &[&str]);

    /// Report an action whose remote call failed after it was logged
    fn format_remote_failure(&self, operation: &str, error: &anyhow::Error);

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Error envelope that still carries the data gathered before the failure.
    pub fn partial(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
