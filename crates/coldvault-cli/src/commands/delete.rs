//! Delete command implementation.
//!
//! Archive ids always come from `archive.txt` in the working directory.
//! `--filename` is accepted on the command line but not consulted here.

use super::Connector;
use super::Outcome;
use crate::error::convert_vault_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use coldvault_core::NoopProgress;
use coldvault_core::archive_log::DEFAULT_ARCHIVE_LOG;
use coldvault_core::archive_log::read_archive_ids_from_path;
use coldvault_core::delete_archives;
use std::path::Path;
use tracing::debug;

pub fn execute(
    vault_name: &str,
    filename: Option<&Path>,
    show_progress: bool,
    formatter: &dyn OutputFormatter,
    connect: Connector<'_>,
) -> Result<Outcome> {
    if let Some(requested) = filename {
        debug!(
            requested = %requested.display(),
            "--filename is not used by delete; reading {DEFAULT_ARCHIVE_LOG}"
        );
    }

    delete_from_log(
        Path::new(DEFAULT_ARCHIVE_LOG),
        vault_name,
        show_progress,
        formatter,
        connect,
    )
}

fn delete_from_log(
    log_path: &Path,
    vault_name: &str,
    show_progress: bool,
    formatter: &dyn OutputFormatter,
    connect: Connector<'_>,
) -> Result<Outcome> {
    // The log is read and closed before the first remote call
    let archive_ids =
        read_archive_ids_from_path(log_path).map_err(|e| convert_vault_error(e, Some(vault_name)))?;
    debug!(count = archive_ids.len(), log = %log_path.display(), "read archive ids");

    if archive_ids.is_empty() {
        formatter.format_warning(&format!(
            "No archive IDs found in {}",
            log_path.display()
        ));
        return Ok(Outcome::Completed);
    }

    let client = connect()?;
    let report = if show_progress {
        let mut progress = CliProgress::new(archive_ids.len(), "Deleting");
        delete_archives(&*client, vault_name, &archive_ids, &mut progress)
    } else {
        delete_archives(&*client, vault_name, &archive_ids, &mut NoopProgress)
    };

    formatter.format_deletion_report(vault_name, &report)?;

    if report.has_failures() {
        Ok(Outcome::RemoteFailure)
    } else {
        Ok(Outcome::Completed)
    }
}
