//! List command implementation

use super::Outcome;
use crate::error::log_remote_failure;
use crate::output::OutputFormatter;
use anyhow::Result;
use coldvault_core::ListConfig;
use coldvault_core::VaultClient;
use coldvault_core::VaultPager;

pub fn execute(
    client: &dyn VaultClient,
    config: ListConfig,
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    let mut vaults = Vec::new();
    let mut failure = None;

    // The pager stops after the first error, keeping what was already listed
    for page in VaultPager::new(client, config.page_size) {
        match page {
            Ok(page) => vaults.extend(page.vaults),
            Err(e) => failure = Some(log_remote_failure(e, None)),
        }
    }

    match failure {
        None => {
            formatter.format_vaults(&vaults)?;
            Ok(Outcome::Completed)
        }
        Some(err) => {
            formatter.format_partial_vaults(&vaults, &err)?;
            Ok(Outcome::RemoteFailure)
        }
    }
}
