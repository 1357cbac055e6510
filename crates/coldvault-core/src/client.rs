//! Capability interface over the remote vault service.

use std::io::Read;

use crate::Result;
use crate::types::JobDescriptor;
use crate::types::VaultPage;

/// The four remote calls the tool depends on.
///
/// Implementations block until the service answers. [`GlacierClient`] binds
/// the trait to Amazon S3 Glacier; `test_utils::MockVaultClient` serves tests.
///
/// [`GlacierClient`]: crate::glacier::GlacierClient
pub trait VaultClient {
    /// Returns at most `limit` vaults, starting after `marker` when given.
    fn list_vaults(&self, limit: u32, marker: Option<&str>) -> Result<VaultPage>;

    /// Starts an inventory-retrieval job for `vault_name`.
    fn initiate_inventory_job(&self, vault_name: &str) -> Result<JobDescriptor>;

    /// Opens the output body of a completed job.
    fn get_job_output(&self, vault_name: &str, job_id: &str) -> Result<Box<dyn Read>>;

    /// Deletes one archive.
    fn delete_archive(&self, vault_name: &str, archive_id: &str) -> Result<()>;
}
