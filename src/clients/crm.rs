//! Zoho CRM client.
//!
//! Wraps the CRM record API (`/crm/private/json/`). Records are sent as XML
//! in the `xmlData` parameter; module names are capitalized before use, so
//! `"leads"` and `"Leads"` address the same module.
//!
//! See <https://www.zoho.com/crm/help/api/modules-fields.html> for modules
//! and their fields.

use serde_json::Value;

#[cfg(doc)]
use crate::clients::errors::ZohoError;
use crate::clients::errors::{
    CREATE_PARAMS_REQUIRED, DELETE_ID_REQUIRED, GET_ID_REQUIRED,
    UPDATE_ID_REQUIRED, UPDATE_PARAMS_REQUIRED,
};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ApiResult;
use crate::clients::product::Product;
use crate::clients::record::{
    capitalize, params_record, require_id, require_params_id, require_payload, Record,
    RecordPayload,
};
use crate::config::ZohoConfig;
use crate::error::ConfigError;

const NOTES_MODULE: &str = "Notes";

/// Client for the Zoho CRM API.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_api::{AuthToken, CrmClient, ZohoConfig};
/// use serde_json::json;
///
/// let config = ZohoConfig::builder()
///     .auth_token(AuthToken::new("your-authtoken")?)
///     .build()?;
/// let crm = CrmClient::new(&config)?;
///
/// let leads = crm.get_records("leads", json!({"fromIndex": 1, "toIndex": 20})).await?;
/// let created = crm
///     .create_record("leads", json!({"Company": "Acme", "Last Name": "Doe"}), json!({}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct CrmClient {
    http_client: HttpClient,
}

impl CrmClient {
    /// Creates a new CRM client.
    ///
    /// Defaults: host `crm.zoho.com`, scope `crmapi`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is incomplete.
    pub fn new(config: &ZohoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(Product::CRM, config)?,
        })
    }

    /// Returns the underlying HTTP engine.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Fetches records of a module (`getRecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn get_records(&self, module: &str, params: Value) -> ApiResult {
        let endpoint = format!("{}/getRecords", capitalize(module));
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, endpoint)
                    .params(params_record(params)),
            )
            .await
    }

    /// Fetches one record (`getRecordById`); `params` must carry an `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when `id`
    /// is missing.
    pub async fn get_record_by_id(&self, module: &str, params: Value) -> ApiResult {
        let (params, _) = require_params_id(params, GET_ID_REQUIRED)?;
        let endpoint = format!("{}/getRecordById", capitalize(module));
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, endpoint)
                    .params(params),
            )
            .await
    }

    /// Inserts one or more records (`insertRecords`).
    ///
    /// `payload` is a record object or an array of record objects. Any
    /// field holding an array of objects (typically `"Product Details"`) is
    /// sent as nested `<product>` entries, one level deep. Extra `params`
    /// (such as `wfTrigger`) are sent alongside the XML.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or not record-shaped.
    pub async fn create_record(&self, module: &str, payload: Value, params: Value) -> ApiResult {
        let payload = require_payload(payload, CREATE_PARAMS_REQUIRED)?;
        let module = capitalize(module);
        let xml = self.http_client.encode_records(&module, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{module}/insertRecords"))
                    .params(params_record(params))
                    .param("xmlData", xml),
            )
            .await
    }

    /// Attaches a note to a record.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn create_note(&self, id: &str, title: &str, content: &str) -> ApiResult {
        let mut note = Record::new();
        note.insert("entityId".to_string(), Value::from(id));
        note.insert("Note Title".to_string(), Value::from(title));
        note.insert("Note Content".to_string(), Value::from(content));
        let payload = RecordPayload::Single(note);
        let xml = self.http_client.encode_records(NOTES_MODULE, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, format!("{NOTES_MODULE}/insertRecords"))
                    .param("xmlData", xml),
            )
            .await
    }

    /// Fetches the notes attached to a record.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn get_notes(&self, id: &str) -> ApiResult {
        self.http_client
            .send(
                self.http_client
                    .operation(
                        HttpMethod::Get,
                        format!("{NOTES_MODULE}/getSearchRecordsByPDC"),
                    )
                    .param("searchColumn", "notesid")
                    .param("searchValue", id),
            )
            .await
    }

    /// Updates a record (`updateRecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or `id` is `null`, an object or an array.
    pub async fn update_record(&self, module: &str, id: impl Into<Value>, payload: Value) -> ApiResult {
        let payload = require_payload(payload, UPDATE_PARAMS_REQUIRED)?;
        let id = require_id(&id.into(), UPDATE_ID_REQUIRED)?;
        let module = capitalize(module);
        let xml = self.http_client.encode_records(&module, &payload);

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Post, format!("{module}/updateRecords"))
                    .param("id", id)
                    .param("xmlData", xml),
            )
            .await
    }

    /// Deletes a record (`deleteRecords`).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when `id`
    /// is `null`, an object or an array.
    pub async fn delete_record(&self, module: &str, id: impl Into<Value>) -> ApiResult {
        let id = require_id(&id.into(), DELETE_ID_REQUIRED)?;
        let endpoint = format!("{}/deleteRecords", capitalize(module));

        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, endpoint)
                    .param("id", id),
            )
            .await
    }
}
