//! Credential resolution from configuration.
//!
//! The provider API key comes from the config file or, failing that, from an
//! environment variable. It is resolved on demand and never cached so a key
//! exported after startup is picked up by the next translation.

use super::types::ProviderConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the provider.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ProviderConfig {
    /// Resolve the API key from the config file or the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment variables.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.to_string()));
            }
        }

        match lookup(&self.api_key_env) {
            Some(value) if !value.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(value.trim().to_string()))
            }
            Some(_) => CredentialStatus::Unconfigured {
                reason: format!("{} is empty", self.api_key_env),
            },
            None => CredentialStatus::Unconfigured {
                reason: format!("{} is missing", self.api_key_env),
            },
        }
    }

    /// Check if a usable API key is available.
    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            api_key: api_key.map(str::to_string),
            api_key_env: "TARJUMAN_TEST_KEY".to_string(),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("gsk-secret".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("gsk-secret"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("gsk-secret"));

        assert_eq!(secret.expose(), "gsk-secret");
    }

    #[test]
    fn test_config_key_wins_over_env() {
        let status = provider(Some("from-config")).resolve_credential_with(|_| Some("from-env".into()));
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "from-config"),
            other => panic!("expected Configured, got {:?}", other),
        }
    }

    #[test]
    fn test_env_key_used_when_config_key_blank() {
        let status = provider(Some("   ")).resolve_credential_with(|name| {
            assert_eq!(name, "TARJUMAN_TEST_KEY");
            Some("  from-env \n".into())
        });
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "from-env"),
            other => panic!("expected Configured, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_env_is_unconfigured() {
        let status = provider(None).resolve_credential_with(|_| None);
        match status {
            CredentialStatus::Unconfigured { reason } => {
                assert!(reason.contains("TARJUMAN_TEST_KEY"));
                assert!(reason.contains("missing"));
            }
            other => panic!("expected Unconfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_env_is_unconfigured() {
        let status = provider(None).resolve_credential_with(|_| Some(" \t".into()));
        assert!(matches!(status, CredentialStatus::Unconfigured { .. }));
    }
}
