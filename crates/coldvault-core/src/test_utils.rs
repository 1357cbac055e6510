//! Test utilities: an in-memory [`VaultClient`].
//!
//! `MockVaultClient` serves a fixed vault list with marker-based paging,
//! returns canned job output and records every call so tests can assert
//! which remote operations ran.
//!
//! # Panics
//!
//! Functions in this module may panic on misuse since they are designed for
//! test use only.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::io::Cursor;
use std::io::Read;

use crate::Result;
use crate::VaultError;
use crate::client::VaultClient;
use crate::error::Operation;
use crate::types::JobDescriptor;
use crate::types::Vault;
use crate::types::VaultPage;

/// Job id handed out by [`MockVaultClient::initiate_inventory_job`].
pub const MOCK_JOB_ID: &str = "mock-job-0001";

/// A recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `list_vaults(limit, marker)`.
    ListVaults {
        /// Requested page size.
        limit: u32,
        /// Continuation marker.
        marker: Option<String>,
    },
    /// `initiate_inventory_job(vault)`.
    InitiateJob {
        /// Vault name.
        vault: String,
    },
    /// `get_job_output(vault, job_id)`.
    GetJobOutput {
        /// Vault name.
        vault: String,
        /// Job id.
        job_id: String,
    },
    /// `delete_archive(vault, archive_id)`.
    DeleteArchive {
        /// Vault name.
        vault: String,
        /// Archive id.
        archive_id: String,
    },
}

/// In-memory vault service.
///
/// # Examples
///
/// ```
/// use coldvault_core::VaultPager;
/// use coldvault_core::test_utils::MockVaultClient;
///
/// let client = MockVaultClient::with_vaults(5);
/// let names: Vec<String> = VaultPager::new(&client, 2)
///     .flat_map(|page| page.unwrap().vaults)
///     .map(|v| v.name)
///     .collect();
/// assert_eq!(names.len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct MockVaultClient {
    vaults: Vec<Vault>,
    job_output: Option<Vec<u8>>,
    list_error: Option<String>,
    initiate_error: Option<String>,
    failing_deletes: HashSet<String>,
    calls: RefCell<Vec<Call>>,
}

impl MockVaultClient {
    /// Creates a client holding `count` vaults named `vault-000`, `vault-001`, ...
    #[must_use]
    pub fn with_vaults(count: usize) -> Self {
        let vaults = (0..count)
            .map(|i| Vault::new(format!("vault-{i:03}"), i as u64, (i as u64) * 1024))
            .collect();
        Self {
            vaults,
            ..Self::default()
        }
    }

    /// Replaces the vault list.
    #[must_use]
    pub fn vaults(mut self, vaults: Vec<Vault>) -> Self {
        self.vaults = vaults;
        self
    }

    /// Sets the body returned by `get_job_output`.
    #[must_use]
    pub fn with_job_output(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.job_output = Some(body.into());
        self
    }

    /// Makes every `list_vaults` call fail with `code`.
    #[must_use]
    pub fn fail_list_vaults(mut self, code: &str) -> Self {
        self.list_error = Some(code.to_string());
        self
    }

    /// Makes every `initiate_inventory_job` call fail with `code`.
    #[must_use]
    pub fn fail_initiate_job(mut self, code: &str) -> Self {
        self.initiate_error = Some(code.to_string());
        self
    }

    /// Makes deletion of `archive_id` fail.
    #[must_use]
    pub fn fail_delete_for(mut self, archive_id: &str) -> Self {
        self.failing_deletes.insert(archive_id.to_string());
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Archive ids passed to `delete_archive`, including failed ones.
    pub fn delete_attempts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DeleteArchive { archive_id, .. } => Some(archive_id.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn failure(operation: Operation, code: &str) -> VaultError {
    VaultError::Service {
        operation,
        code: Some(code.to_string()),
        message: format!("mock {operation} failure"),
    }
}

impl VaultClient for MockVaultClient {
    fn list_vaults(&self, limit: u32, marker: Option<&str>) -> Result<VaultPage> {
        self.record(Call::ListVaults {
            limit,
            marker: marker.map(str::to_string),
        });
        if let Some(code) = &self.list_error {
            return Err(failure(Operation::ListVaults, code));
        }

        let start = match marker {
            Some(m) => m
                .parse::<usize>()
                .map_err(|_| failure(Operation::ListVaults, "InvalidParameterValueException"))?,
            None => 0,
        };
        let end = (start + limit as usize).min(self.vaults.len());
        let start = start.min(end);

        Ok(VaultPage {
            vaults: self.vaults[start..end].to_vec(),
            marker: (end < self.vaults.len()).then(|| end.to_string()),
        })
    }

    fn initiate_inventory_job(&self, vault_name: &str) -> Result<JobDescriptor> {
        self.record(Call::InitiateJob {
            vault: vault_name.to_string(),
        });
        if let Some(code) = &self.initiate_error {
            return Err(failure(Operation::InitiateJob, code));
        }
        Ok(JobDescriptor {
            job_id: MOCK_JOB_ID.to_string(),
            location: Some(format!("/-/vaults/{vault_name}/jobs/{MOCK_JOB_ID}")),
        })
    }

    fn get_job_output(&self, vault_name: &str, job_id: &str) -> Result<Box<dyn Read>> {
        self.record(Call::GetJobOutput {
            vault: vault_name.to_string(),
            job_id: job_id.to_string(),
        });
        self.job_output.as_ref().map_or_else(
            || Err(failure(Operation::GetJobOutput, "InvalidParameterValueException")),
            |body| Ok(Box::new(Cursor::new(body.clone())) as Box<dyn Read>),
        )
    }

    fn delete_archive(&self, vault_name: &str, archive_id: &str) -> Result<()> {
        self.record(Call::DeleteArchive {
            vault: vault_name.to_string(),
            archive_id: archive_id.to_string(),
        });
        if self.failing_deletes.contains(archive_id) {
            return Err(failure(Operation::DeleteArchive, "ResourceNotFoundException"));
        }
        Ok(())
    }
}
