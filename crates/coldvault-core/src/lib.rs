//! Vault listing, inventory retrieval and archive deletion for Amazon S3
//! Glacier.
//!
//! `coldvault-core` wraps the four remote calls the `coldvault` tool needs
//! behind the [`VaultClient`] trait, so the SDK binding ([`GlacierClient`])
//! can be swapped for the in-memory `test_utils::MockVaultClient` in tests
//! (enabled by the `test-utils` feature).
//!
//! # Examples
//!
//! ```no_run
//! use coldvault_core::ClientConfig;
//! use coldvault_core::GlacierClient;
//! use coldvault_core::VaultPager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GlacierClient::connect(&ClientConfig::default())?;
//! for page in VaultPager::new(&client, 10) {
//!     for vault in page?.vaults {
//!         println!("{}: {} archives", vault.name, vault.archive_count);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive_log;
pub mod client;
pub mod config;
pub mod error;
pub mod glacier;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::VaultPager;
pub use api::delete_archive;
pub use api::delete_archives;
pub use api::get_inventory_results;
pub use api::list_vaults;
pub use api::start_inventory;
pub use client::VaultClient;
pub use config::ClientConfig;
pub use config::ListConfig;
pub use error::Result;
pub use error::VaultError;
pub use glacier::GlacierClient;
pub use report::DeleteProgress;
pub use report::DeletionReport;
pub use report::NoopProgress;

pub use types::ArchiveRecord;
pub use types::Inventory;
pub use types::JobDescriptor;
pub use types::Vault;
pub use types::VaultPage;
