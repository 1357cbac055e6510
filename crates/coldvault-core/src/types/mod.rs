//! Read-only views of remote vault entities.
//!
//! Nothing here is owned locally: every value is fetched per call and
//! discarded when the command finishes.

pub mod inventory;
pub mod job;
pub mod vault;

pub use inventory::ArchiveRecord;
pub use inventory::Inventory;
pub use job::JobDescriptor;
pub use vault::Vault;
pub use vault::VaultPage;
