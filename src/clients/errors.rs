//! Call-time error types for the Zoho API SDK.
//!
//! Every public record operation returns `Result<ApiResponse, ZohoError>`.
//! The variants mirror where the failure happened:
//!
//! - [`ZohoError::Validation`]: call arguments were rejected before any request was built
//! - [`ZohoError::Transport`]: the HTTP round trip itself failed
//! - [`ZohoError::Api`]: the remote product reported a business failure
//! - [`ZohoError::NoContent`]: the response body was empty
//!
//! # Example
//!
//! ```rust,ignore
//! use zoho_api::clients::ZohoError;
//!
//! match client.get_records("leads", json!({})).await {
//!     Ok(response) => println!("Leads: {:?}", response.data),
//!     Err(ZohoError::Api { code, message }) => {
//!         println!("Zoho error {:?}: {}", code, message);
//!     }
//!     Err(ZohoError::Validation { message }) => println!("Bad call: {message}"),
//!     Err(ZohoError::Transport(e)) => println!("Network error: {e}"),
//!     Err(ZohoError::NoContent) => println!("Empty response"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when a create call has no usable payload.
pub const CREATE_PARAMS_REQUIRED: &str = "Error: params object required to create record";
/// Message returned when a get-by-id call has no `id` param.
pub const GET_ID_REQUIRED: &str = "Error: ID required parameter missing to get record";
/// Message returned when an update call has no usable payload.
pub const UPDATE_PARAMS_REQUIRED: &str = "Error: params object required to update record";
/// Message returned when an update call has no usable id.
pub const UPDATE_ID_REQUIRED: &str = "Error: ID required parameter missing to update a record";
/// Message returned when a delete call has no usable id.
pub const DELETE_ID_REQUIRED: &str = "Error: ID required parameter missing to delete a record";
/// Message carried by [`ZohoError::NoContent`].
pub const NO_CONTENT: &str = "No content data";

/// An error code reported by a Zoho product.
///
/// Products disagree on the type: CRM and Invoice send numbers, other
/// endpoints send numeric strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// A numeric code, e.g. `4834`.
    Number(i64),
    /// A textual code, e.g. `"4834"` or `"INVALID_TICKET"`.
    Text(String),
}

impl ErrorCode {
    /// Reads an error code from a JSON value.
    ///
    /// Returns `None` for `null`, booleans, arrays and objects.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            ),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Unified error type for Zoho record operations.
#[derive(Debug, Error)]
pub enum ZohoError {
    /// The call arguments were rejected; no request was sent.
    #[error("{message}")]
    Validation {
        /// Fixed, human-readable reason.
        message: String,
    },

    /// Network or connection error, passed through unmodified.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The product reported a failure in its response body.
    #[error("{message}")]
    Api {
        /// Product-specific error code, when one was sent.
        code: Option<ErrorCode>,
        /// Product-specific error message.
        message: String,
    },

    /// The response body was empty.
    #[error("No content data")]
    NoContent,
}

impl ZohoError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Returns the product error code, if this is an [`ZohoError::Api`] error with one.
    #[must_use]
    pub const fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api { code, .. } => code.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_from_number_and_string() {
        assert_eq!(ErrorCode::from_value(&json!(4834)), Some(ErrorCode::Number(4834)));
        assert_eq!(
            ErrorCode::from_value(&json!("4600")),
            Some(ErrorCode::Text("4600".to_string()))
        );
        assert_eq!(ErrorCode::from_value(&json!(null)), None);
        assert_eq!(ErrorCode::from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::Number(4834).to_string(), "4834");
        assert_eq!(ErrorCode::Text("E1".to_string()).to_string(), "E1");
    }

    #[test]
    fn test_api_error_displays_message() {
        let error = ZohoError::Api {
            code: Some(ErrorCode::Number(4834)),
            message: "Invalid Ticket Id".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid Ticket Id");
        assert_eq!(error.code(), Some(&ErrorCode::Number(4834)));
    }

    #[test]
    fn test_no_content_message() {
        assert_eq!(ZohoError::NoContent.to_string(), NO_CONTENT);
    }

    #[test]
    fn test_validation_error_keeps_fixed_text() {
        let error = ZohoError::validation(DELETE_ID_REQUIRED);
        assert_eq!(
            error.to_string(),
            "Error: ID required parameter missing to delete a record"
        );
        assert!(error.code().is_none());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ZohoError::NoContent;
        let _: &dyn std::error::Error = &error;
    }
}
