//! Response normalization for the Zoho API SDK.
//!
//! Each product reports failures differently: CRM and Support wrap everything
//! in a `response` envelope, Creator signals errors with a top-level
//! `message`, Invoice with a non-zero top-level `code`. [`normalize`] maps all
//! of them to one `Result<ApiResponse, ZohoError>`.
//!
//! A body that is not valid JSON is treated as `{}` rather than as an error.
//! This can hide a real failure (an HTML error page reads as an empty
//! success), but callers rely on the lenient behavior.

use serde_json::{Map, Value};

use crate::clients::errors::{ErrorCode, ZohoError};
use crate::clients::product::ResponseShape;

/// A raw response body, before parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawBody {
    /// UTF-8 text, parsed as JSON.
    Text(String),
    /// Raw bytes from a binary download.
    Binary(Vec<u8>),
}

/// The payload of a successful call.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseData {
    /// Parsed JSON data.
    Json(Value),
    /// Raw bytes from a binary download.
    Binary(Vec<u8>),
}

impl ResponseData {
    /// Returns the JSON data, if this is a JSON payload.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    /// Returns the bytes, if this is a binary payload.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Json(_) => None,
            Self::Binary(bytes) => Some(bytes),
        }
    }
}

/// A successful API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// Product success code, 0 when the product sends none.
    pub code: i64,
    /// Response data.
    pub data: ResponseData,
}

impl ApiResponse {
    fn json(code: i64, data: Value) -> Self {
        Self {
            code,
            data: ResponseData::Json(data),
        }
    }
}

/// Outcome of one API call.
pub type ApiResult = Result<ApiResponse, ZohoError>;

/// Maps a raw body to a uniform result using the product's response shape.
///
/// # Errors
///
/// Returns [`ZohoError::NoContent`] for an empty body and
/// [`ZohoError::Api`] when the body carries the product's error marker.
///
/// # Example
///
/// ```rust
/// use zoho_api::clients::{normalize, ErrorCode, Product, RawBody, ZohoError};
///
/// let body = r#"{"response":{"error":{"code":4834,"message":"Invalid Ticket Id"}}}"#;
/// let result = normalize(Product::SUPPORT.response, RawBody::Text(body.to_string()));
///
/// assert!(matches!(
///     result,
///     Err(ZohoError::Api { code: Some(ErrorCode::Number(4834)), ref message })
///         if message == "Invalid Ticket Id"
/// ));
/// ```
pub fn normalize(shape: ResponseShape, body: RawBody) -> ApiResult {
    let text = match body {
        RawBody::Binary(bytes) if bytes.is_empty() => return Err(ZohoError::NoContent),
        RawBody::Binary(bytes) => {
            return Ok(ApiResponse {
                code: 0,
                data: ResponseData::Binary(bytes),
            })
        }
        RawBody::Text(text) if text.is_empty() => return Err(ZohoError::NoContent),
        RawBody::Text(text) => text,
    };

    let parsed = serde_json::from_str::<Value>(&text).unwrap_or_else(|e| {
        tracing::debug!("Response body is not valid JSON ({}), treating it as empty", e);
        Value::Object(Map::new())
    });

    match shape {
        ResponseShape::Envelope {
            nodata_is_error,
            code_field,
            data_field,
        } => normalize_envelope(parsed, nodata_is_error, code_field, data_field),
        ResponseShape::MessageMarker => {
            if is_truthy(parsed.get("message")) {
                Err(api_error(&parsed))
            } else {
                Ok(ApiResponse::json(0, parsed))
            }
        }
        ResponseShape::StatusCode => match parsed.get("code") {
            Some(code) if !is_zero(code) => Err(api_error(&parsed)),
            _ => {
                let code = success_code(parsed.get("code"));
                Ok(ApiResponse::json(code, parsed))
            }
        },
    }
}

fn normalize_envelope(
    parsed: Value,
    nodata_is_error: bool,
    code_field: &str,
    data_field: &str,
) -> ApiResult {
    let Some(response) = parsed.get("response") else {
        return Ok(ApiResponse::json(0, parsed));
    };

    if let Some(error) = response.get("error").filter(|e| is_truthy(Some(*e))) {
        return Err(api_error(error));
    }
    if nodata_is_error {
        if let Some(nodata) = response.get("nodata").filter(|n| is_truthy(Some(*n))) {
            return Err(api_error(nodata));
        }
    }

    let Some(result) = response.get("result") else {
        return Ok(ApiResponse::json(0, parsed));
    };

    let code = success_code(result.get(code_field));
    let data = result
        .get(data_field)
        .filter(|d| !d.is_null())
        .unwrap_or(result)
        .clone();

    Ok(ApiResponse::json(code, data))
}

/// Builds an API error from an object carrying `code` and `message`.
fn api_error(source: &Value) -> ZohoError {
    let message = match source.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    ZohoError::Api {
        code: source.get("code").and_then(ErrorCode::from_value),
        message,
    }
}

/// Reads a success code, defaulting to 0 when absent or not numeric.
fn success_code(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn is_zero(value: &Value) -> bool {
    value.as_f64() == Some(0.0)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Bool(true) | Value::Array(_) | Value::Object(_)) => true,
    }
}
