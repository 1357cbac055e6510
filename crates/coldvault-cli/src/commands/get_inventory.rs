//! Get-inventory command implementation

use super::Outcome;
use crate::error::log_remote_failure;
use crate::output::OutputFormatter;
use anyhow::Result;
use coldvault_core::VaultClient;
use coldvault_core::get_inventory_results;

pub fn execute(
    client: &dyn VaultClient,
    vault_name: &str,
    job_id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    match get_inventory_results(client, vault_name, job_id) {
        Ok(inventory) => {
            formatter.format_inventory(&inventory)?;
            Ok(Outcome::Completed)
        }
        Err(e) => {
            let err = log_remote_failure(e, Some(vault_name));
            formatter.format_remote_failure("get_inventory", &err);
            Ok(Outcome::RemoteFailure)
        }
    }
}
