//! Amazon S3 Glacier binding of [`VaultClient`].
//!
//! The AWS SDK is async; this client owns a current-thread Tokio runtime and
//! blocks on every call so the rest of the crate stays synchronous.

use std::io;
use std::io::Cursor;
use std::io::Read;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_glacier::Client;
use aws_sdk_glacier::error::DisplayErrorContext;
use aws_sdk_glacier::error::ProvideErrorMetadata;
use aws_sdk_glacier::error::SdkError;
use aws_sdk_glacier::types::DescribeVaultOutput;
use aws_sdk_glacier::types::JobParameters;
use tokio::runtime::Runtime;
use tracing::debug;
use tracing::trace;

use crate::ClientConfig;
use crate::Result;
use crate::VaultError;
use crate::client::VaultClient;
use crate::error::Operation;
use crate::types::JobDescriptor;
use crate::types::Vault;
use crate::types::VaultPage;

const INVENTORY_RETRIEVAL: &str = "inventory-retrieval";
const INVENTORY_FORMAT: &str = "JSON";

/// Blocking Glacier client.
pub struct GlacierClient {
    runtime: Runtime,
    client: Client,
    account_id: String,
}

impl GlacierClient {
    /// Builds a client from the SDK's default configuration chain.
    ///
    /// No request is sent; credentials are resolved lazily on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Setup`] if the async runtime cannot be created.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| VaultError::Setup(format!("cannot start runtime: {e}")))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = runtime.block_on(loader.load());
        debug!(region = ?sdk_config.region(), "glacier client configured");

        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
            account_id: config.account_id.clone(),
        })
    }
}

impl VaultClient for GlacierClient {
    fn list_vaults(&self, limit: u32, marker: Option<&str>) -> Result<VaultPage> {
        let mut request = self
            .client
            .list_vaults()
            .account_id(&self.account_id)
            .limit(i32::try_from(limit).unwrap_or(i32::MAX));
        if let Some(marker) = marker {
            request = request.marker(marker);
        }

        let output = self
            .runtime
            .block_on(request.send())
            .map_err(|e| service_error(Operation::ListVaults, &e))?;

        let vaults: Vec<Vault> = output.vault_list().iter().map(to_vault).collect();
        trace!(count = vaults.len(), more = output.marker().is_some(), "listed vaults");

        Ok(VaultPage {
            vaults,
            marker: output.marker().map(str::to_string),
        })
    }

    fn initiate_inventory_job(&self, vault_name: &str) -> Result<JobDescriptor> {
        let parameters = JobParameters::builder()
            .r#type(INVENTORY_RETRIEVAL)
            .format(INVENTORY_FORMAT)
            .build();

        let output = self
            .runtime
            .block_on(
                self.client
                    .initiate_job()
                    .account_id(&self.account_id)
                    .vault_name(vault_name)
                    .job_parameters(parameters)
                    .send(),
            )
            .map_err(|e| service_error(Operation::InitiateJob, &e))?;

        let job_id = output.job_id().ok_or(VaultError::IncompleteResponse {
            operation: Operation::InitiateJob,
            field: "jobId",
        })?;

        Ok(JobDescriptor {
            job_id: job_id.to_string(),
            location: output.location().map(str::to_string),
        })
    }

    fn get_job_output(&self, vault_name: &str, job_id: &str) -> Result<Box<dyn Read>> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_job_output()
                    .account_id(&self.account_id)
                    .vault_name(vault_name)
                    .job_id(job_id)
                    .send(),
            )
            .map_err(|e| service_error(Operation::GetJobOutput, &e))?;

        let body = self
            .runtime
            .block_on(output.body.collect())
            .map_err(io::Error::other)?
            .into_bytes();
        trace!(bytes = body.len(), "downloaded job output");

        Ok(Box::new(Cursor::new(body)))
    }

    fn delete_archive(&self, vault_name: &str, archive_id: &str) -> Result<()> {
        self.runtime
            .block_on(
                self.client
                    .delete_archive()
                    .account_id(&self.account_id)
                    .vault_name(vault_name)
                    .archive_id(archive_id)
                    .send(),
            )
            .map_err(|e| service_error(Operation::DeleteArchive, &e))?;
        Ok(())
    }
}

fn service_error<E, R>(operation: Operation, err: &SdkError<E, R>) -> VaultError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    VaultError::Service {
        operation,
        code: err
            .as_service_error()
            .and_then(|e| e.code())
            .map(str::to_string),
        message: DisplayErrorContext(err).to_string(),
    }
}

fn to_vault(v: &DescribeVaultOutput) -> Vault {
    Vault {
        name: v.vault_name().unwrap_or_default().to_string(),
        arn: v.vault_arn().map(str::to_string),
        archive_count: u64::try_from(v.number_of_archives()).unwrap_or(0),
        size_bytes: u64::try_from(v.size_in_bytes()).unwrap_or(0),
        creation_date: v.creation_date().map(str::to_string),
        last_inventory_date: v.last_inventory_date().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_vault_maps_counts() {
        let described = DescribeVaultOutput::builder()
            .vault_name("photos")
            .vault_arn("arn:aws:glacier:us-east-1:123:vaults/photos")
            .number_of_archives(3)
            .size_in_bytes(4096)
            .build();
        let vault = to_vault(&described);
        assert_eq!(vault.name, "photos");
        assert_eq!(vault.archive_count, 3);
        assert_eq!(vault.size_bytes, 4096);
        assert!(vault.arn.is_some());
        assert!(vault.creation_date.is_none());
    }

    #[test]
    fn test_to_vault_clamps_negative_counts() {
        let described = DescribeVaultOutput::builder()
            .vault_name("odd")
            .number_of_archives(-1)
            .size_in_bytes(-1)
            .build();
        let vault = to_vault(&described);
        assert_eq!(vault.archive_count, 0);
        assert_eq!(vault.size_bytes, 0);
    }
}
