//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use coldvault_core::ArchiveRecord;
use coldvault_core::DeletionReport;
use coldvault_core::Inventory;
use coldvault_core::JobDescriptor;
use coldvault_core::Vault;
use console::Style;
use console::Term;
use console::style;

const VAULT_HEADER: &str = "#     Size         Vault Name";
const VAULT_RULE: &str = "------------------------------";

/// Console writer for interactive use.
///
/// Flushes its terminal when dropped so nothing buffered is lost on exit.
pub struct HumanFormatter {
    verbose: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn vault_line(vault: &Vault) -> String {
        format!(
            "{:3}  {:12}  {}",
            vault.archive_count, vault.size_bytes, vault.name
        )
    }

    fn archive_line(archive: &ArchiveRecord) -> String {
        format!("  Size: {:6},  Archive ID: {}", archive.size, archive.archive_id)
    }

    fn styled_unknown_action(action: &str) -> String {
        let red = Style::new().red().force_styling(true);
        format!(
            "{} {} {}",
            red.apply_to("ERROR: Action"),
            red.clone().bold().apply_to(action),
            red.apply_to("is not recognized.")
        )
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;
        const TB: u64 = GB * 1024;

        if bytes >= TB {
            format!("{:.1} TB", bytes as f64 / TB as f64)
        } else if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl Drop for HumanFormatter {
    fn drop(&mut self) {
        let _ = self.term.flush();
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_vaults(&self, vaults: &[Vault]) -> Result<()> {
        self.term.write_line(VAULT_HEADER)?;
        self.term.write_line(VAULT_RULE)?;
        for vault in vaults {
            self.term.write_line(&Self::vault_line(vault))?;
        }
        Ok(())
    }

    fn format_partial_vaults(&self, vaults: &[Vault], _error: &anyhow::Error) -> Result<()> {
        self.format_vaults(vaults)
    }

    fn format_job_started(&self, vault_name: &str, job: &JobDescriptor) -> Result<()> {
        self.term.write_line(&format!(
            "Initiated inventory-retrieval job for {vault_name}"
        ))?;
        self.term
            .write_line(&format!("Retrieval Job ID: {}", job.job_id))?;
        if self.verbose
            && let Some(location) = &job.location
        {
            self.term.write_line(&format!("Location: {location}"))?;
        }
        Ok(())
    }

    fn format_inventory(&self, inventory: &Inventory) -> Result<()> {
        self.term
            .write_line(&format!("Vault ARN: {}", inventory.vault_arn))?;
        if self.verbose
            && let Some(date) = &inventory.inventory_date
        {
            self.term.write_line(&format!("Inventory Date: {date}"))?;
        }

        for archive in &inventory.archives {
            self.term.write_line(&Self::archive_line(archive))?;
        }

        if self.verbose {
            self.term.write_line(&format!(
                "Total: {} archives, {}",
                inventory.archives.len(),
                Self::format_size(inventory.total_size())
            ))?;
        }
        Ok(())
    }

    fn format_deletion_report(&self, vault_name: &str, report: &DeletionReport) -> Result<()> {
        for archive_id in &report.deleted {
            self.term
                .write_line(&format!("Deleted archive {archive_id} from {vault_name}"))?;
        }

        if report.has_failures() {
            let summary = format!(
                "{} of {} archives could not be deleted",
                report.failed.len(),
                report.attempted()
            );
            self.format_warning(&summary);
        }

        if self.verbose {
            self.term
                .write_line(&format!("  Duration: {:?}", report.duration))?;
        }
        Ok(())
    }

    fn format_unknown_action(&self, action: &str, valid_actions: &[&str]) {
        let valid = valid_actions.join(" ");
        if self.use_colors {
            let _ = self.term.write_line(&Self::styled_unknown_action(action));
            let _ = self
                .term
                .write_line(&format!("Valid actions are: {}", style(valid).cyan()));
        } else {
            let _ = self
                .term
                .write_line(&format!("ERROR: Action {action} is not recognized."));
            let _ = self.term.write_line(&format!("Valid actions are: {valid}"));
        }
    }

    // Already logged to stderr
    fn format_remote_failure(&self, _operation: &str, _error: &anyhow::Error) {}

    fn format_error(&self, error: &anyhow::Error) {
        let term = Term::stderr();
        if console::colors_enabled_stderr() {
            let _ = term.write_line(&format!("{} {error:?}", style("Error:").red().bold()));
        } else {
            let _ = term.write_line(&format!("Error: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style(message).yellow()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_line_alignment() {
        let vault = Vault::new("photos", 7, 123_456);
        assert_eq!(
            HumanFormatter::vault_line(&vault),
            "  7        123456  photos"
        );
    }

    #[test]
    fn test_vault_line_wide_values_are_not_truncated() {
        let vault = Vault::new("big", 12_345, 1_234_567_890_123);
        assert_eq!(
            HumanFormatter::vault_line(&vault),
            "12345  1234567890123  big"
        );
    }

    #[test]
    fn test_header_matches_rule_width() {
        assert_eq!(VAULT_RULE.len(), 30);
        assert!(VAULT_HEADER.starts_with('#'));
    }

    #[test]
    fn test_archive_line_from_decoded_inventory() {
        let inventory: Inventory = serde_json::from_str(
            r#"{"VaultARN": "arn:x", "ArchiveList": [{"Size": 5, "ArchiveId": "a1"}]}"#,
        )
        .unwrap_or_else(|e| panic!("inventory should decode: {e}"));
        let line = HumanFormatter::archive_line(&inventory.archives[0]);
        assert_eq!(line, "  Size:      5,  Archive ID: a1");
    }

    #[test]
    fn test_unknown_action_segments_each_keep_red() {
        let line = HumanFormatter::styled_unknown_action("bogus");
        assert_eq!(
            console::strip_ansi_codes(&line),
            "ERROR: Action bogus is not recognized."
        );
        for segment in ["ERROR: Action", "bogus", "is not recognized."] {
            let before = line.split(segment).next().unwrap_or_default();
            let since_reset = before.rsplit("\u{1b}[0m").next().unwrap_or_default();
            assert!(
                since_reset.contains("\u{1b}[31m"),
                "segment {segment:?} is not red: {line:?}"
            );
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(HumanFormatter::format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(HumanFormatter::format_size(1024_u64.pow(4)), "1.0 TB");
    }
}
