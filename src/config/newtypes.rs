//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Zoho auth token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use zoho_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated host name, such as `crm.zoho.com` or `crm.zoho.eu`.
///
/// Hosts are bare names: no scheme, no path and no whitespace. The port is
/// configured separately.
///
/// # Example
///
/// ```rust
/// use zoho_api::Host;
///
/// let host = Host::new("crm.zoho.eu").unwrap();
/// assert_eq!(host.as_ref(), "crm.zoho.eu");
///
/// assert!(Host::new("https://crm.zoho.eu").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if the host is empty or contains a
    /// scheme, a path separator or whitespace.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim().to_string();

        let invalid = host.is_empty()
            || host.contains("://")
            || host.contains('/')
            || host.chars().any(char::is_whitespace);
        if invalid {
            return Err(ConfigError::InvalidHost { host });
        }

        Ok(Self(host))
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_rejects_empty() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
        assert!(matches!(
            AuthToken::new("   "),
            Err(ConfigError::EmptyAuthToken)
        ));
    }

    #[test]
    fn test_auth_token_debug_is_masked() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "AuthToken(*****)");
    }

    #[test]
    fn test_host_accepts_bare_names() {
        assert_eq!(Host::new("crm.zoho.com").unwrap().as_ref(), "crm.zoho.com");
        assert_eq!(Host::new(" 127.0.0.1 ").unwrap().as_ref(), "127.0.0.1");
    }

    #[test]
    fn test_host_rejects_scheme_and_path() {
        assert!(matches!(
            Host::new("https://crm.zoho.com"),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(matches!(
            Host::new("crm.zoho.com/crm"),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(matches!(Host::new(""), Err(ConfigError::InvalidHost { .. })));
    }
}
