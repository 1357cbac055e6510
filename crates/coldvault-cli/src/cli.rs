//! CLI argument parsing using clap.

use clap::ArgAction;
use clap::Parser;
use coldvault_core::ClientConfig;
use coldvault_core::ListConfig;
use std::path::PathBuf;

/// Action names accepted on the command line, in help order.
pub const VALID_ACTIONS: [&str; 4] = ["list", "start_inventory", "get_inventory", "delete"];

#[derive(Parser)]
#[command(name = "coldvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform: list, start_inventory, get_inventory, delete
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Name of the Glacier vault
    #[arg(value_name = "VAULT_NAME")]
    pub vault: String,

    /// Display all log messages (repeat to include SDK internals)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// File with the log of archive ids
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub filename: Option<PathBuf>,

    /// Job id used to retrieve inventory results
    #[arg(short, long, value_name = "JOB_ID")]
    pub job: Option<String>,

    /// Number of vaults requested per listing call
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// AWS region (default: SDK resolution)
    #[arg(long)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long)]
    pub profile: Option<String>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero on usage errors (2) and remote failures (1)
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            region: self.region.clone(),
            profile: self.profile.clone(),
            ..Default::default()
        }
    }

    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            page_size: self.page_size,
        }
    }
}

/// A recognized action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    StartInventory,
    GetInventory,
    Delete,
}

impl Action {
    /// Looks up an action by its command-line name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Self::List),
            "start_inventory" => Some(Self::StartInventory),
            "get_inventory" => Some(Self::GetInventory),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_valid_action_parses() {
        for name in VALID_ACTIONS {
            assert!(Action::from_name(name).is_some(), "{name} not recognized");
        }
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(Action::from_name("bogus"), None);
        assert_eq!(Action::from_name("LIST"), None);
        assert_eq!(Action::from_name(""), None);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "coldvault",
            "get_inventory",
            "photos",
            "-dd",
            "-j",
            "job-1",
            "--region",
            "eu-west-1",
        ])
        .unwrap();
        assert_eq!(cli.action, "get_inventory");
        assert_eq!(cli.vault, "photos");
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.job.as_deref(), Some("job-1"));
        assert_eq!(cli.page_size, 10);
        assert_eq!(cli.client_config().region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.client_config().account_id, "-");
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(Cli::try_parse_from(["coldvault", "list", "v", "--page-size", "0"]).is_err());
        let cli = Cli::try_parse_from(["coldvault", "list", "v", "--page-size", "3"]).unwrap();
        assert_eq!(cli.list_config().page_size, 3);
    }

    #[test]
    fn test_vault_name_is_required() {
        assert!(Cli::try_parse_from(["coldvault", "list"]).is_err());
    }
}
