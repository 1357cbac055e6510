//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use coldvault_core::DeletionReport;
use coldvault_core::Inventory;
use coldvault_core::JobDescriptor;
use coldvault_core::Vault;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct VaultListOutput<'a> {
    vaults: &'a [Vault],
}

#[derive(Serialize)]
struct JobOutput<'a> {
    vault: &'a str,
    #[serde(flatten)]
    job: &'a JobDescriptor,
}

#[derive(Serialize)]
struct FailedOutput<'a> {
    archive_id: &'a str,
    reason: &'a str,
}

#[derive(Serialize)]
struct DeletionOutput<'a> {
    vault: &'a str,
    deleted: &'a [String],
    failed: Vec<FailedOutput<'a>>,
    duration_ms: u128,
}

impl OutputFormatter for JsonFormatter {
    fn format_vaults(&self, vaults: &[Vault]) -> Result<()> {
        Self::output(&JsonOutput::success("list", VaultListOutput { vaults }))
    }

    fn format_partial_vaults(&self, vaults: &[Vault], error: &anyhow::Error) -> Result<()> {
        Self::output(&JsonOutput::partial(
            "list",
            VaultListOutput { vaults },
            format!("{error:#}"),
        ))
    }

    fn format_job_started(&self, vault_name: &str, job: &JobDescriptor) -> Result<()> {
        Self::output(&JsonOutput::success(
            "start_inventory",
            JobOutput {
                vault: vault_name,
                job,
            },
        ))
    }

    fn format_inventory(&self, inventory: &Inventory) -> Result<()> {
        Self::output(&JsonOutput::success("get_inventory", inventory))
    }

    fn format_deletion_report(&self, vault_name: &str, report: &DeletionReport) -> Result<()> {
        let data = DeletionOutput {
            vault: vault_name,
            deleted: &report.deleted,
            failed: report
                .failed
                .iter()
                .map(|f| FailedOutput {
                    archive_id: &f.archive_id,
                    reason: &f.reason,
                })
                .collect(),
            duration_ms: report.duration.as_millis(),
        };
        if report.has_failures() {
            let summary = format!(
                "{} of {} archives could not be deleted",
                report.failed.len(),
                report.attempted()
            );
            Self::output(&JsonOutput::partial("delete", data, summary))
        } else {
            Self::output(&JsonOutput::success("delete", data))
        }
    }

    fn format_unknown_action(&self, action: &str, valid_actions: &[&str]) {
        let output = JsonOutput::<()>::error(
            action,
            format!(
                "Action {action} is not recognized. Valid actions are: {}",
                valid_actions.join(" ")
            ),
        );
        let _ = Self::output(&output);
    }

    fn format_remote_failure(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
