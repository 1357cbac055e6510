//! Inventory documents produced by inventory-retrieval jobs.

use serde::Deserialize;
use serde::Serialize;

/// Decoded output of a completed inventory-retrieval job.
///
/// Field names follow the JSON document the service produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inventory {
    /// Amazon Resource Name of the inventoried vault.
    #[serde(rename = "VaultARN")]
    pub vault_arn: String,

    /// Date the inventory was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_date: Option<String>,

    /// Archives in the order the service listed them.
    #[serde(rename = "ArchiveList")]
    pub archives: Vec<ArchiveRecord>,
}

impl Inventory {
    /// Sum of all archive sizes in bytes, saturating on overflow.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.archives
            .iter()
            .fold(0_u64, |acc, a| acc.saturating_add(a.size))
    }
}

/// A single archive entry of an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveRecord {
    /// Opaque archive identifier.
    pub archive_id: String,

    /// Archive size in bytes.
    pub size: u64,

    /// Description supplied at upload time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_description: Option<String>,

    /// Upload timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// SHA-256 tree hash of the archive.
    #[serde(
        rename = "SHA256TreeHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sha256_tree_hash: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_inventory() {
        let json = r#"{"VaultARN": "arn:x", "ArchiveList": [{"Size": 5, "ArchiveId": "a1"}]}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();
        assert_eq!(inventory.vault_arn, "arn:x");
        assert_eq!(inventory.inventory_date, None);
        assert_eq!(inventory.archives.len(), 1);
        assert_eq!(inventory.archives[0].archive_id, "a1");
        assert_eq!(inventory.archives[0].size, 5);
    }

    #[test]
    fn test_decode_full_archive_record() {
        let json = r#"{
            "ArchiveId": "abc",
            "ArchiveDescription": "backup.tar",
            "CreationDate": "2019-03-20T17:03:43Z",
            "Size": 3145728,
            "SHA256TreeHash": "deadbeef"
        }"#;
        let record: ArchiveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.archive_description.as_deref(), Some("backup.tar"));
        assert_eq!(record.sha256_tree_hash.as_deref(), Some("deadbeef"));
        assert_eq!(record.size, 3_145_728);
    }

    #[test]
    fn test_missing_archive_list_is_rejected() {
        let json = r#"{"VaultARN": "arn:x"}"#;
        assert!(serde_json::from_str::<Inventory>(json).is_err());
    }

    #[test]
    fn test_total_size() {
        let json = r#"{"VaultARN": "arn:x", "ArchiveList": [
            {"Size": 5, "ArchiveId": "a1"},
            {"Size": 7, "ArchiveId": "a2"}
        ]}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();
        assert_eq!(inventory.total_size(), 12);
    }
}
