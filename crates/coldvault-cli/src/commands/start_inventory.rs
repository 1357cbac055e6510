//! Start-inventory command implementation

use super::Outcome;
use crate::error::log_remote_failure;
use crate::output::OutputFormatter;
use anyhow::Result;
use coldvault_core::VaultClient;
use coldvault_core::start_inventory;

pub fn execute(
    client: &dyn VaultClient,
    vault_name: &str,
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    match start_inventory(client, vault_name) {
        Ok(job) => {
            formatter.format_job_started(vault_name, &job)?;
            Ok(Outcome::Completed)
        }
        Err(e) => {
            let err = log_remote_failure(e, Some(vault_name));
            formatter.format_remote_failure("start_inventory", &err);
            Ok(Outcome::RemoteFailure)
        }
    }
}
