//! Error types for the Zoho API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A product client can only be obtained from a valid
//! configuration, so there is no half-initialized client to guard against.
//!
//! # Example
//!
//! ```rust
//! use zoho_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Zoho authtoken.")]
    EmptyAuthToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before the client can be created.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Protocol is not one of `http` or `https`.
    #[error("Invalid protocol '{protocol}'. Expected 'http' or 'https'.")]
    InvalidProtocol {
        /// The invalid protocol string that was provided.
        protocol: String,
    },

    /// Host is invalid.
    #[error("Invalid host '{host}'. Expected a bare host name such as 'crm.zoho.com'.")]
    InvalidHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// The HTTP client could not be initialized (for example, no TLS backend).
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientInit {
        /// The underlying failure, rendered as text.
        reason: String,
    },
}
