//! Action dispatch.
//!
//! Exactly one action runs per invocation. Local validation (action name,
//! required flags, the archive log) happens before the client is built, so
//! usage errors never reach the network.

pub mod delete;
pub mod get_inventory;
pub mod list;
pub mod start_inventory;

use std::process::ExitCode;

use anyhow::Result;
use coldvault_core::VaultClient;

use crate::cli::Action;
use crate::cli::Cli;
use crate::cli::VALID_ACTIONS;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;

/// Builds the remote client on demand.
pub type Connector<'a> = &'a dyn Fn() -> Result<Box<dyn VaultClient>>;

/// How an action ended, before it is mapped to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    UsageError,
    RemoteFailure,
}

impl Outcome {
    /// Lenient mode always exits 0; `--strict` maps usage errors to 2 and
    /// remote failures to 1.
    pub fn exit_code(self, strict: bool) -> ExitCode {
        ExitCode::from(self.exit_status(strict))
    }

    fn exit_status(self, strict: bool) -> u8 {
        match (self, strict) {
            (Self::Completed, _) | (_, false) => 0,
            (Self::UsageError, true) => 2,
            (Self::RemoteFailure, true) => 1,
        }
    }
}

pub fn dispatch(cli: &Cli, formatter: &dyn OutputFormatter, connect: Connector<'_>) -> Result<Outcome> {
    let Some(action) = Action::from_name(&cli.action) else {
        formatter.format_unknown_action(&cli.action, &VALID_ACTIONS);
        return Ok(Outcome::UsageError);
    };
    tracing::debug!(?action, vault = %cli.vault, "dispatching");

    match action {
        Action::List => list::execute(&*connect()?, cli.list_config(), formatter),
        Action::StartInventory => start_inventory::execute(&*connect()?, &cli.vault, formatter),
        Action::GetInventory => {
            let Some(job_id) = cli.job.as_deref() else {
                formatter.format_warning("Job ID is required to get the inventory results");
                return Ok(Outcome::UsageError);
            };
            get_inventory::execute(&*connect()?, &cli.vault, job_id, formatter)
        }
        Action::Delete => delete::execute(
            &cli.vault,
            cli.filename.as_deref(),
            !cli.json && CliProgress::should_show(),
            formatter,
            connect,
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use super::*;
    use coldvault_core::DeletionReport;
    use coldvault_core::Inventory;
    use coldvault_core::JobDescriptor;
    use coldvault_core::Vault;
    use coldvault_core::VaultPage;
    use coldvault_core::test_utils::MockVaultClient;
    use std::cell::RefCell;
    use std::io::Read;
    use std::rc::Rc;

    /// Formatter that records what would have been printed.
    #[derive(Default)]
    pub struct RecordingFormatter {
        pub lines: RefCell<Vec<String>>,
    }

    impl RecordingFormatter {
        pub fn text(&self) -> String {
            self.lines.borrow().join("\n")
        }

        fn push(&self, line: String) {
            self.lines.borrow_mut().push(line);
        }
    }

    impl OutputFormatter for RecordingFormatter {
        fn format_vaults(&self, vaults: &[Vault]) -> Result<()> {
            for vault in vaults {
                self.push(format!("vault {}", vault.name));
            }
            Ok(())
        }

        fn format_partial_vaults(&self, vaults: &[Vault], error: &anyhow::Error) -> Result<()> {
            self.format_vaults(vaults)?;
            self.push(format!("failed list: {error}"));
            Ok(())
        }

        fn format_job_started(&self, vault_name: &str, job: &JobDescriptor) -> Result<()> {
            self.push(format!("job {} for {vault_name}", job.job_id));
            Ok(())
        }

        fn format_inventory(&self, inventory: &Inventory) -> Result<()> {
            for archive in &inventory.archives {
                self.push(format!("archive {} {}", archive.archive_id, archive.size));
            }
            Ok(())
        }

        fn format_deletion_report(&self, vault_name: &str, report: &DeletionReport) -> Result<()> {
            for id in &report.deleted {
                self.push(format!("Deleted archive {id} from {vault_name}"));
            }
            Ok(())
        }

        fn format_unknown_action(&self, action: &str, valid_actions: &[&str]) {
            self.push(format!("unknown {action}: {}", valid_actions.join(" ")));
        }

        fn format_remote_failure(&self, operation: &str, error: &anyhow::Error) {
            self.push(format!("failed {operation}: {error}"));
        }

        fn format_error(&self, error: &anyhow::Error) {
            self.push(format!("error {error}"));
        }

        fn format_warning(&self, message: &str) {
            self.push(format!("warning {message}"));
        }
    }

    /// Hands the same mock to the dispatcher and to the test.
    pub struct SharedMock(pub Rc<MockVaultClient>);

    impl VaultClient for SharedMock {
        fn list_vaults(&self, limit: u32, marker: Option<&str>) -> coldvault_core::Result<VaultPage> {
            self.0.list_vaults(limit, marker)
        }

        fn initiate_inventory_job(&self, vault_name: &str) -> coldvault_core::Result<JobDescriptor> {
            self.0.initiate_inventory_job(vault_name)
        }

        fn get_job_output(
            &self,
            vault_name: &str,
            job_id: &str,
        ) -> coldvault_core::Result<Box<dyn Read>> {
            self.0.get_job_output(vault_name, job_id)
        }

        fn delete_archive(&self, vault_name: &str, archive_id: &str) -> coldvault_core::Result<()> {
            self.0.delete_archive(vault_name, archive_id)
        }
    }

    pub fn parse(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(std::iter::once("coldvault").chain(args.iter().copied())).unwrap()
    }
}
