//! High-level vault operations.
//!
//! Each function performs one remote call (or one sequential loop of calls)
//! through a [`VaultClient`].

use std::io::Read;
use std::time::Instant;

use tracing::debug;
use tracing::error;
use tracing::info;

use crate::DeleteProgress;
use crate::DeletionReport;
use crate::Result;
use crate::client::VaultClient;
use crate::report::FailedDeletion;
use crate::types::Inventory;
use crate::types::JobDescriptor;
use crate::types::VaultPage;

/// Lists one page of vaults.
///
/// `marker` of `None` requests the first page. The returned page carries a
/// marker when more vaults remain.
///
/// # Errors
///
/// Returns an error if the service call fails. An empty final page is
/// `Ok`, never an error.
///
/// # Examples
///
/// ```no_run
/// use coldvault_core::ClientConfig;
/// use coldvault_core::GlacierClient;
/// use coldvault_core::list_vaults;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GlacierClient::connect(&ClientConfig::default())?;
/// let page = list_vaults(&client, 10, None)?;
/// for vault in &page.vaults {
///     println!("{} ({} archives)", vault.name, vault.archive_count);
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_vaults(
    client: &dyn VaultClient,
    page_size: u32,
    marker: Option<&str>,
) -> Result<VaultPage> {
    debug!(page_size, marker = ?marker, "listing vaults");
    client.list_vaults(page_size.max(1), marker)
}

/// Iterator over all vault pages, following continuation markers.
///
/// Yields each page once. After an error the error is yielded and the
/// iteration stops.
pub struct VaultPager<'a> {
    client: &'a dyn VaultClient,
    page_size: u32,
    marker: Option<String>,
    finished: bool,
}

impl<'a> VaultPager<'a> {
    /// Starts a listing from the first page.
    pub fn new(client: &'a dyn VaultClient, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            marker: None,
            finished: false,
        }
    }
}

impl Iterator for VaultPager<'_> {
    type Item = Result<VaultPage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match list_vaults(self.client, self.page_size, self.marker.as_deref()) {
            Ok(page) => {
                self.marker.clone_from(&page.marker);
                self.finished = page.is_last();
                Some(Ok(page))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Starts an inventory-retrieval job for a vault.
///
/// The job runs asynchronously on the service side; its output becomes
/// available hours later through [`get_inventory_results`].
///
/// # Errors
///
/// Returns an error if the vault does not exist, the call is throttled or
/// rejected, or the response carries no job id.
pub fn start_inventory(client: &dyn VaultClient, vault_name: &str) -> Result<JobDescriptor> {
    let job = client.initiate_inventory_job(vault_name)?;
    info!(vault = vault_name, job_id = %job.job_id, "initiated inventory-retrieval job");
    Ok(job)
}

/// Fetches and decodes the output of a completed inventory job.
///
/// The body is read to the end before decoding. Jobs that are still running
/// fail like any other remote error; nothing here waits or retries.
///
/// # Errors
///
/// Returns an error if the service call fails, the body cannot be read, or
/// the body is not a complete inventory document.
pub fn get_inventory_results(
    client: &dyn VaultClient,
    vault_name: &str,
    job_id: &str,
) -> Result<Inventory> {
    let mut body = client.get_job_output(vault_name, job_id)?;
    let mut raw = Vec::new();
    body.read_to_end(&mut raw)?;
    debug!(vault = vault_name, job_id, bytes = raw.len(), "decoding inventory");

    let inventory: Inventory = serde_json::from_slice(&raw)?;
    Ok(inventory)
}

/// Deletes one archive.
///
/// Returns `true` on success. A rejected or failed call is logged and
/// reported as `false`; it never propagates.
pub fn delete_archive(client: &dyn VaultClient, vault_name: &str, archive_id: &str) -> bool {
    attempt_delete(client, vault_name, archive_id).is_ok()
}

/// Deletes every archive in `archive_ids`, one call each, in order.
///
/// A failure never stops the batch.
pub fn delete_archives<S: AsRef<str>>(
    client: &dyn VaultClient,
    vault_name: &str,
    archive_ids: &[S],
    progress: &mut dyn DeleteProgress,
) -> DeletionReport {
    let started = Instant::now();
    let total = archive_ids.len();
    let mut report = DeletionReport::new();

    for (index, archive_id) in archive_ids.iter().enumerate() {
        let archive_id = archive_id.as_ref();
        progress.on_archive_start(archive_id, total, index + 1);

        let deleted = match attempt_delete(client, vault_name, archive_id) {
            Ok(()) => {
                report.deleted.push(archive_id.to_string());
                true
            }
            Err(e) => {
                report.failed.push(FailedDeletion {
                    archive_id: archive_id.to_string(),
                    reason: e.to_string(),
                });
                false
            }
        };

        progress.on_archive_complete(archive_id, deleted);
    }

    progress.on_complete();
    report.duration = started.elapsed();
    report
}

fn attempt_delete(client: &dyn VaultClient, vault_name: &str, archive_id: &str) -> Result<()> {
    match client.delete_archive(vault_name, archive_id) {
        Ok(()) => {
            info!(vault = vault_name, archive_id, "deleted archive");
            Ok(())
        }
        Err(e) => {
            error!(vault = vault_name, archive_id, error = %e, "failed to delete archive");
            Err(e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use crate::VaultError;
    use crate::test_utils::Call;
    use crate::test_utils::MockVaultClient;
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_list_vaults_first_page_has_no_marker_argument() {
        let client = MockVaultClient::with_vaults(3);
        let page = list_vaults(&client, 2, None).unwrap();
        assert_eq!(page.vaults.len(), 2);
        assert!(page.marker.is_some());
        assert_eq!(
            client.calls(),
            vec![Call::ListVaults {
                limit: 2,
                marker: None
            }]
        );
    }

    #[test]
    fn test_list_vaults_error_is_not_an_empty_page() {
        let client = MockVaultClient::with_vaults(3).fail_list_vaults("throttled");
        let err = list_vaults(&client, 10, None).unwrap_err();
        assert!(err.is_remote());
    }

    #[test]
    fn test_pager_stops_after_error() {
        let client = MockVaultClient::with_vaults(3).fail_list_vaults("throttled");
        let mut pager = VaultPager::new(&client, 10);
        assert!(pager.next().unwrap().is_err());
        assert!(pager.next().is_none());
    }

    #[test]
    fn test_start_inventory_returns_job() {
        let client = MockVaultClient::default();
        let job = start_inventory(&client, "photos").unwrap();
        assert!(!job.job_id.is_empty());
    }

    #[test]
    fn test_start_inventory_failure_yields_no_job() {
        let client = MockVaultClient::default().fail_initiate_job("ResourceNotFoundException");
        assert!(start_inventory(&client, "missing").is_err());
    }

    #[test]
    fn test_get_inventory_results_decodes_body() {
        let client = MockVaultClient::default().with_job_output(
            r#"{"VaultARN": "arn:x", "ArchiveList": [{"Size": 5, "ArchiveId": "a1"}]}"#,
        );
        let inventory = get_inventory_results(&client, "photos", "job-1").unwrap();
        assert_eq!(inventory.vault_arn, "arn:x");
        assert_eq!(inventory.archives[0].archive_id, "a1");
    }

    #[test]
    fn test_get_inventory_results_truncated_body() {
        let client = MockVaultClient::default().with_job_output(r#"{"VaultARN": "arn:x", "Arch"#);
        let err = get_inventory_results(&client, "photos", "job-1").unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn test_delete_archive_success_and_failure() {
        let client = MockVaultClient::default().fail_delete_for("bad");
        assert!(delete_archive(&client, "photos", "abc123"));
        assert!(!delete_archive(&client, "photos", "bad"));
    }

    #[test]
    fn test_delete_archive_logs_each_outcome() {
        let client = MockVaultClient::default().fail_delete_for("bad");
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(delete_archive(&client, "photos", "abc123"));
            assert!(!delete_archive(&client, "photos", "bad"));
        });

        let text = logs.contents();
        let deleted = text
            .lines()
            .find(|line| line.contains("deleted archive"))
            .unwrap();
        assert!(deleted.contains("INFO"));
        assert!(deleted.contains("abc123"));

        let failed = text
            .lines()
            .find(|line| line.contains("failed to delete archive"))
            .unwrap();
        assert!(failed.contains("ERROR"));
        assert!(failed.contains("bad"));
    }

    #[test]
    fn test_delete_archives_does_not_short_circuit() {
        let client = MockVaultClient::default().fail_delete_for("b");
        let ids = ["a", "b", "c"];
        let report = delete_archives(&client, "photos", &ids, &mut NoopProgress);

        assert_eq!(report.deleted, vec!["a", "c"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].archive_id, "b");
        assert_eq!(client.delete_attempts(), vec!["a", "b", "c"]);
    }
}
