//! Client and listing configuration.

/// Account id meaning "the account that owns the credentials".
pub const CURRENT_ACCOUNT: &str = "-";

/// Default number of vaults requested per listing call.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Settings used to build a [`GlacierClient`](crate::glacier::GlacierClient).
///
/// Credentials are never configured here; they come from the SDK's default
/// provider chain (environment, shared config files, instance metadata).
///
/// # Examples
///
/// ```
/// use coldvault_core::ClientConfig;
///
/// let config = ClientConfig {
///     region: Some("eu-west-1".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.account_id, "-");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Region override. `None` uses the SDK default resolution.
    pub region: Option<String>,

    /// Named profile from the shared config files.
    pub profile: Option<String>,

    /// Account id sent with every request.
    pub account_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            account_id: CURRENT_ACCOUNT.to_string(),
        }
    }
}

/// Vault listing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Vaults requested per call. Must be positive.
    pub page_size: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = ClientConfig::default();
        assert!(client.region.is_none());
        assert!(client.profile.is_none());
        assert_eq!(client.account_id, CURRENT_ACCOUNT);
        assert_eq!(ListConfig::default().page_size, 10);
    }
}
