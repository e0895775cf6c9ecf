//! Zoho Support client.
//!
//! Wraps the Support JSON API (`/api/json/`). Every request carries
//! `portal`, `authtoken` and `department`, so [`SupportClient::new`] fails
//! when the configuration lacks a portal or department. Records are sent as
//! `<requests>` XML in the `xml` parameter, using lowercase `<fl>` tags and
//! raw values.

use serde_json::Value;

#[cfg(doc)]
use crate::clients::errors::ZohoError;
use crate::clients::errors::{
    CREATE_PARAMS_REQUIRED, DELETE_ID_REQUIRED, GET_ID_REQUIRED, UPDATE_ID_REQUIRED,
    UPDATE_PARAMS_REQUIRED,
};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ApiResult;
use crate::clients::product::Product;
use crate::clients::record::{params_record, require_id, require_params_id, require_payload};
use crate::config::ZohoConfig;
use crate::error::ConfigError;

const ROOT_TAG: &str = "requests";

/// Client for the Zoho Support API.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_api::{AuthToken, SupportClient, ZohoConfig};
/// use serde_json::json;
///
/// let config = ZohoConfig::builder()
///     .auth_token(AuthToken::new("your-authtoken")?)
///     .portal("acme")
///     .department("Sales")
///     .build()?;
/// let support = SupportClient::new(&config)?;
///
/// let cases = support.get_records("requests", json!({"fromindex": 1})).await?;
/// ```
#[derive(Debug)]
pub struct SupportClient {
    http_client: HttpClient,
}

impl SupportClient {
    /// Creates a new Support client.
    ///
    /// Defaults: host `support.zoho.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when `portal` or
    /// `department` is not configured.
    pub fn new(config: &ZohoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(Product::SUPPORT, config)?,
        })
    }

    /// Returns the underlying HTTP engine.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Adds one or more records (`addrecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or not record-shaped.
    pub async fn create_record(&self, module: &str, payload: Value) -> ApiResult {
        let payload = require_payload(payload, CREATE_PARAMS_REQUIRED)?;
        let xml = self.http_client.encode_records(ROOT_TAG, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/addrecords"))
                    .param("xml", xml),
            )
            .await
    }

    /// Fetches records of a module (`getrecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn get_records(&self, module: &str, params: Value) -> ApiResult {
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/getrecords"))
                    .params(params_record(params)),
            )
            .await
    }

    /// Fetches one record (`getrecordsbyid`); `params` must carry an `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when `id`
    /// is missing.
    pub async fn get_record_by_id(&self, module: &str, params: Value) -> ApiResult {
        let (params, _) = require_params_id(params, GET_ID_REQUIRED)?;

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/getrecordsbyid"))
                    .params(params),
            )
            .await
    }

    /// Updates a record (`updaterecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or `id` is `null`, an object or an array.
    pub async fn update_record(&self, module: &str, id: impl Into<Value>, payload: Value) -> ApiResult {
        let payload = require_payload(payload, UPDATE_PARAMS_REQUIRED)?;
        let id = require_id(&id.into(), UPDATE_ID_REQUIRED)?;
        let xml = self.http_client.encode_records(ROOT_TAG, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/updaterecords"))
                    .param("id", id)
                    .param("xml", xml),
            )
            .await
    }

    /// Deletes a record (`deleterecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when `id`
    /// is `null`, an object or an array.
    pub async fn delete_record(&self, module: &str, id: impl Into<Value>) -> ApiResult {
        let id = require_id(&id.into(), DELETE_ID_REQUIRED)?;

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/deleterecords"))
                    .param("id", id),
            )
            .await
    }
}
