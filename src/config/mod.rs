//! Configuration types for the Zoho API SDK.
//!
//! This module provides the configuration shared by every product client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZohoConfig`]: Connection settings and credentials for one product client
//! - [`ZohoConfigBuilder`]: A builder for constructing [`ZohoConfig`] instances
//! - [`AuthToken`]: A validated auth token with masked debug output
//! - [`Host`]: A validated bare host name
//! - [`Protocol`]: Plaintext or encrypted transport
//!
//! Host, port and scope are optional here; each product client fills in its
//! own defaults (for example `crm.zoho.com` and scope `crmapi` for CRM).
//!
//! # Example
//!
//! ```rust
//! use zoho_api::{AuthToken, Protocol, ZohoConfig};
//!
//! let config = ZohoConfig::builder()
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .protocol(Protocol::Https)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.port(), 443);
//! ```

mod newtypes;
mod protocol;

pub use newtypes::{AuthToken, Host};
pub use protocol::Protocol;

use crate::error::ConfigError;

/// Configuration for a Zoho product client.
///
/// `ZohoConfig` is `Clone`, `Send`, and `Sync`, so one configuration can be
/// shared by several clients.
///
/// # Example
///
/// ```rust
/// use zoho_api::{AuthToken, Host, ZohoConfig};
///
/// let config = ZohoConfig::builder()
///     .auth_token(AuthToken::new("token").unwrap())
///     .host(Host::new("support.zoho.eu").unwrap())
///     .portal("acme")
///     .department("Sales")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.portal(), Some("acme"));
/// ```
#[derive(Clone, Debug)]
pub struct ZohoConfig {
    protocol: Protocol,
    host: Option<Host>,
    port: Option<u16>,
    auth_token: AuthToken,
    scope: Option<String>,
    portal: Option<String>,
    department: Option<String>,
    export_host: Option<Host>,
}

impl ZohoConfig {
    /// Creates a new builder for constructing a `ZohoConfig`.
    #[must_use]
    pub fn builder() -> ZohoConfigBuilder {
        ZohoConfigBuilder::new()
    }

    /// Returns the transport protocol.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the configured host, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Returns the configured port, or the protocol's default port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.protocol.default_port())
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the configured API scope, if any.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the Support portal name, if any.
    #[must_use]
    pub fn portal(&self) -> Option<&str> {
        self.portal.as_deref()
    }

    /// Returns the Support department name, if any.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns the Creator export host override, if any.
    #[must_use]
    pub const fn export_host(&self) -> Option<&Host> {
        self.export_host.as_ref()
    }
}

// Verify ZohoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZohoConfig>();
};

/// Builder for constructing [`ZohoConfig`] instances.
///
/// The only required field is `auth_token`.
///
/// # Defaults
///
/// - `protocol`: `https`
/// - `port`: 443 for https, 80 for http
/// - `host`, `scope`: product default, resolved by the product client
/// - `portal`, `department`: `None` (required by the Support client)
/// - `export_host`: `creatorexport.zoho.com` (Creator downloads)
#[derive(Debug, Default)]
pub struct ZohoConfigBuilder {
    protocol: Option<Protocol>,
    host: Option<Host>,
    port: Option<u16>,
    auth_token: Option<AuthToken>,
    scope: Option<String>,
    portal: Option<String>,
    department: Option<String>,
    export_host: Option<Host>,
}

impl ZohoConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the transport protocol.
    #[must_use]
    pub const fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Sets the host, overriding the product default.
    #[must_use]
    pub fn host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the port, overriding the protocol default.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the API scope (CRM and Creator).
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the portal name (Support).
    #[must_use]
    pub fn portal(mut self, portal: impl Into<String>) -> Self {
        self.portal = Some(portal.into());
        self
    }

    /// Sets the department name (Support).
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the host serving Creator file downloads.
    #[must_use]
    pub fn export_host(mut self, host: Host) -> Self {
        self.export_host = Some(host);
        self
    }

    /// Builds the [`ZohoConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth_token` is not set.
    pub fn build(self) -> Result<ZohoConfig, ConfigError> {
        let auth_token = self
            .auth_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "auth_token",
            })?;

        Ok(ZohoConfig {
            protocol: self.protocol.unwrap_or_default(),
            host: self.host,
            port: self.port,
            auth_token,
            scope: self.scope,
            portal: self.portal,
            department: self.department,
            export_host: self.export_host,
        })
    }
}
