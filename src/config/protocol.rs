//! Transport protocol selection.
//!
//! This module provides the [`Protocol`] enum used to pick between plaintext
//! and encrypted transport for a product client.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Transport protocol used to reach a Zoho product host.
///
/// # Example
///
/// ```rust
/// use zoho_api::Protocol;
///
/// let protocol: Protocol = "http".parse().unwrap();
/// assert_eq!(protocol, Protocol::Http);
/// assert_eq!(protocol.default_port(), 80);
/// assert_eq!(Protocol::default(), Protocol::Https);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plaintext HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
}

impl Protocol {
    /// Returns the URL scheme for this protocol.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns the port used when none is configured.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(ConfigError::InvalidProtocol {
                protocol: other.to_string(),
            }),
        }
    }
}
