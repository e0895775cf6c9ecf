//! Record payloads and call-argument validation.
//!
//! Public record operations accept `serde_json::Value` arguments so callers
//! can use `json!` directly. This module turns those values into typed
//! payloads, rejecting malformed input before any request is built.

use serde_json::{Map, Value};

use crate::clients::errors::ZohoError;

/// One record: field name to value, in insertion order.
pub type Record = Map<String, Value>;

/// A record or an ordered list of records sent in one call.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordPayload {
    /// A single record.
    Single(Record),
    /// Several records, sent as consecutive rows.
    Many(Vec<Record>),
}

impl RecordPayload {
    /// Builds a payload from a JSON value.
    ///
    /// Returns `None` unless the value is a non-empty object or a non-empty
    /// array whose entries are all objects.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(record) if !record.is_empty() => Some(Self::Single(record)),
            Value::Array(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::Many),
            _ => None,
        }
    }

    /// Returns the records as a slice; a single record is a one-element slice.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Single(record) => std::slice::from_ref(record),
            Self::Many(records) => records,
        }
    }

    /// Returns the payload as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Single(record) => Value::Object(record.clone()),
            Self::Many(records) => {
                Value::Array(records.iter().cloned().map(Value::Object).collect())
            }
        }
    }
}

impl From<Record> for RecordPayload {
    fn from(record: Record) -> Self {
        Self::Single(record)
    }
}

impl From<Vec<Record>> for RecordPayload {
    fn from(records: Vec<Record>) -> Self {
        Self::Many(records)
    }
}

/// Validates a payload, failing with `message` when it is empty or not record-shaped.
pub(crate) fn require_payload(value: Value, message: &str) -> Result<RecordPayload, ZohoError> {
    RecordPayload::from_value(value).ok_or_else(|| ZohoError::validation(message))
}

/// Validates a record id, failing with `message` for `null`, objects and arrays.
///
/// Strings are used verbatim; numbers and booleans use their display form.
pub(crate) fn require_id(id: &Value, message: &str) -> Result<String, ZohoError> {
    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => Err(ZohoError::validation(message)),
    }
}

/// Returns the call params as a record; anything but an object counts as no params.
pub(crate) fn params_record(params: Value) -> Record {
    match params {
        Value::Object(record) => record,
        _ => Record::new(),
    }
}

/// Validates get-by-id params: an object carrying a truthy scalar `id`.
///
/// Returns the params together with the id rendered as text.
pub(crate) fn require_params_id(params: Value, message: &str) -> Result<(Record, String), ZohoError> {
    let Value::Object(record) = params else {
        return Err(ZohoError::validation(message));
    };

    let id = match record.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => return Err(ZohoError::validation(message)),
    };

    Ok((record, id))
}

/// Upper-cases the first character of a module name.
pub(crate) fn capitalize(module: &str) -> String {
    let mut chars = module.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
