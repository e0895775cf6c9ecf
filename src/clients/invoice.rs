//! Zoho Invoice client.
//!
//! Wraps the Invoice v3 API (`/api/v3/`). Unlike the other products,
//! Invoice takes plain JSON: payloads are serialized into the `JSONString`
//! parameter. Only `authtoken` is added for authentication.

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

const JSON_PARAM: &str = "JSONString";

/// Client for the Zoho Invoice API.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_api::{AuthToken, InvoiceClient, ZohoConfig};
/// use serde_json::json;
///
/// let config = ZohoConfig::builder()
///     .auth_token(AuthToken::new("your-authtoken")?)
///     .build()?;
/// let invoice = InvoiceClient::new(&config)?;
///
/// let contact = invoice
///     .create_record("contacts", json!({"contact_name": "Acme"}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct InvoiceClient {
    http_client: HttpClient,
}

impl InvoiceClient {
    /// Creates a new Invoice client.
    ///
    /// Defaults: host `invoice.zoho.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is incomplete.
    pub fn new(config: &ZohoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(Product::INVOICE, config)?,
        })
    }

    /// Returns the underlying HTTP engine.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Creates a record in `module` (for example `contacts` or `invoices`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or not record-shaped.
    pub async fn create_record(&self, module: &str, payload: Value) -> ApiResult {
        let payload = require_payload(payload, CREATE_PARAMS_REQUIRED)?;
        let json = self.http_client.encode_records(module, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Post, module)
                    .param(JSON_PARAM, json),
            )
            .await
    }

    /// Replaces the fields of record `id` in `module`.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or `id` is `null`, an object or an array.
    pub async fn update_record(&self, module: &str, id: impl Into<Value>, payload: Value) -> ApiResult {
        let payload = require_payload(payload, UPDATE_PARAMS_REQUIRED)?;
        let id = require_id(&id.into(), UPDATE_ID_REQUIRED)?;
        let json = self.http_client.encode_records(module, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Put, format!("{module}/{id}"))
                    .param(JSON_PARAM, json),
            )
            .await
    }

    /// Lists the records of `module`; `params` become query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn get_records(&self, module: &str, params: Value) -> ApiResult {
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, module)
                    .params(params_record(params)),
            )
            .await
    }

    /// Fetches one record; `params` must carry an `id`, which is also sent
    /// as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when `id`
    /// is missing.
    pub async fn get_record_by_id(&self, module: &str, params: Value) -> ApiResult {
        let (params, id) = require_params_id(params, GET_ID_REQUIRED)?;

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/{id}"))
                    .params(params),
            )
            .await
    }

    /// Deletes record `id` from `module`.
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
                    .operation(HttpMethod::Delete, format!("{module}/{id}")),
            )
            .await
    }
}
