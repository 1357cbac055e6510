//! Vault records and listing pages.

use serde::Serialize;

/// A vault as reported by a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vault {
    /// Vault name, unique within an account and region.
    pub name: String,

    /// Amazon Resource Name of the vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// Number of archives as of the last inventory.
    pub archive_count: u64,

    /// Total archive size in bytes as of the last inventory.
    pub size_bytes: u64,

    /// Creation timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// Timestamp of the last completed inventory (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_inventory_date: Option<String>,
}

impl Vault {
    /// Creates a vault record with only the fields surfaced in listings.
    pub fn new(name: impl Into<String>, archive_count: u64, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            arn: None,
            archive_count,
            size_bytes,
            creation_date: None,
            last_inventory_date: None,
        }
    }
}

/// One page of a vault listing.
///
/// `marker` is `None` on the last page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultPage {
    /// Vaults in service order.
    pub vaults: Vec<Vault>,

    /// Continuation marker for the next page.
    pub marker: Option<String>,
}

impl VaultPage {
    /// Returns `true` if this is the final page of the listing.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.marker.is_none()
    }
}
