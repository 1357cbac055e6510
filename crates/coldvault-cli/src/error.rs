//! Error conversion utilities for CLI.
//!
//! Converts coldvault-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use coldvault_core::VaultError;
use coldvault_core::error::Operation;
use std::io::ErrorKind;

/// Converts `VaultError` to user-friendly anyhow error with context
///
/// `vault` is `None` for account-wide calls such as listing.
pub fn convert_vault_error(err: VaultError, vault: Option<&str>) -> anyhow::Error {
    let subject = vault.map(|v| format!(" for vault '{v}'")).unwrap_or_default();
    match err {
        VaultError::File { path, source } if source.kind() == ErrorKind::NotFound => {
            anyhow!(
                "Archive log '{}' not found\n\
                 HINT: The delete action reads archive IDs from archive.txt in the current directory.",
                path.display()
            )
        }
        VaultError::Service {
            operation,
            code: Some(code),
            message,
        } => {
            let hint = match (operation, code.as_str()) {
                (_, "ResourceNotFoundException") if operation != Operation::GetJobOutput => {
                    "HINT: Check the vault name and --region."
                }
                (Operation::GetJobOutput, _) => {
                    "HINT: Inventory jobs take several hours; retry once the job has completed."
                }
                (_, "ThrottlingException" | "LimitExceededException") => {
                    "HINT: The request was throttled; retry later."
                }
                (
                    _,
                    "AccessDeniedException"
                    | "UnrecognizedClientException"
                    | "ExpiredTokenException"
                    | "MissingAuthenticationTokenException",
                ) => "HINT: Check your AWS credentials (environment, --profile).",
                _ => "",
            };
            let message = format!("{operation} failed{subject} ({code}): {message}");
            if hint.is_empty() {
                anyhow!(message)
            } else {
                anyhow!("{message}\n{hint}")
            }
        }
        VaultError::Decode(decode_err) => {
            anyhow!(
                "Job output{subject} is not a valid inventory: {decode_err}\n\
                 HINT: Make sure the job id belongs to an inventory-retrieval job."
            )
        }
        _ => match vault {
            Some(vault) => anyhow::Error::from(err).context(format!("Error processing vault '{vault}'")),
            None => anyhow::Error::from(err),
        },
    }
}

/// Logs a remote failure that the command turns into "no result".
///
/// Returns the converted error so the caller can report it in its output.
pub fn log_remote_failure(err: VaultError, vault: Option<&str>) -> anyhow::Error {
    let err = convert_vault_error(err, vault);
    tracing::error!("{err:#}");
    err
}
