//! Property-based tests for pagination and log scraping.

#![allow(clippy::unwrap_used)]

use coldvault_core::VaultPager;
use coldvault_core::archive_log::read_archive_ids;
use coldvault_core::test_utils::MockVaultClient;
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    /// Every vault is listed exactly once, in service order.
    #[test]
    fn prop_pagination_yields_every_vault_once(
        total in 1usize..60,
        page_size in 1u32..20,
    ) {
        let client = MockVaultClient::with_vaults(total);
        let names: Vec<String> = VaultPager::new(&client, page_size)
            .flat_map(|page| page.unwrap().vaults)
            .map(|v| v.name)
            .collect();

        let expected: Vec<String> = (0..total).map(|i| format!("vault-{i:03}")).collect();
        prop_assert_eq!(names, expected);

        let pages = total.div_ceil(page_size as usize);
        prop_assert_eq!(client.calls().len(), pages);
    }

    /// Lines without the marker never produce ids.
    #[test]
    fn prop_lines_without_marker_are_skipped(
        lines in prop::collection::vec("[a-zA-Z0-9 ,:]{0,40}", 0..20)
    ) {
        let text = lines
            .iter()
            .filter(|l| !l.contains("Archive ID:"))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        let ids = read_archive_ids(Cursor::new(text)).unwrap();
        prop_assert!(ids.is_empty());
    }

    /// Ids written in the log format are recovered verbatim.
    #[test]
    fn prop_ids_round_trip_through_log_lines(
        records in prop::collection::vec(("[A-Za-z0-9_-]{1,40}", 0u64..1_000_000), 0..20)
    ) {
        let text: String = records
            .iter()
            .map(|(id, size)| format!("  Size: {size:6},  Archive ID: {id}\n"))
            .collect();
        let ids = read_archive_ids(Cursor::new(text)).unwrap();
        let expected: Vec<String> = records.into_iter().map(|(id, _)| id).collect();
        prop_assert_eq!(ids, expected);
    }
}
