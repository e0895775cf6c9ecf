//! Zoho Creator client.
//!
//! Wraps the Creator REST API (`/api/json/`). Every request carries
//! `authtoken`, `scope` and `raw=true`; the query string is sent unescaped,
//! which Creator requires for criteria expressions. Image downloads go to a
//! separate export host and return raw bytes.
//!
//! See <https://www.zoho.com/creator/help/api/rest-api/> for the endpoints.

use serde_json::Value;

use crate::clients::errors::{ZohoError, CREATE_PARAMS_REQUIRED, UPDATE_PARAMS_REQUIRED};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ApiResult;
use crate::clients::product::Product;
use crate::clients::record::{params_record, require_payload, Record, RecordPayload};
use crate::config::ZohoConfig;
use crate::error::ConfigError;

/// Client for the Zoho Creator API.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_api::{AuthToken, CreatorClient, ZohoConfig};
/// use serde_json::json;
///
/// let config = ZohoConfig::builder()
///     .auth_token(AuthToken::new("your-authtoken")?)
///     .build()?;
/// let creator = CreatorClient::new(&config)?;
///
/// let orders = creator
///     .view_records_in_view("order-desk", "All_Orders", json!({"criteria": "Status == \"Open\""}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct CreatorClient {
    http_client: HttpClient,
}

impl CreatorClient {
    /// Creates a new Creator client.
    ///
    /// Defaults: host `creator.zoho.com`, scope `creatorapi`, export host
    /// `creatorexport.zoho.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is incomplete.
    pub fn new(config: &ZohoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(Product::CREATOR, config)?,
        })
    }

    /// Returns the underlying HTTP engine.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sets the session cookie sent with every later request.
    pub fn set_cookie(&mut self, cookie: impl Into<String>) {
        self.http_client.set_cookie(cookie);
    }

    /// Adds records to a form; `params` holds the field values.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when
    /// `params` is empty.
    pub async fn add_records(&self, application: &str, form: &str, params: Value) -> ApiResult {
        let params = require_record(params, CREATE_PARAMS_REQUIRED)?;
        self.form_request(application, form, "add", params).await
    }

    /// Adds records to a form, sending them as XML in the `xml` param.
    ///
    /// `payload` is a record object or an array of record objects.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when the
    /// payload is empty or not record-shaped.
    pub async fn write_records(&self, application: &str, form: &str, payload: Value) -> ApiResult {
        let payload = require_payload(payload, CREATE_PARAMS_REQUIRED)?;
        let xml = self.http_client.encode_records(form, &payload);

        let mut params = Record::new();
        params.insert("xml".to_string(), Value::String(xml));
        self.form_request(application, form, "add", params).await
    }

    /// Edits the records of a form matching `criteria` in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Validation`] without sending a request when
    /// `params` is empty.
    pub async fn edit_records(&self, application: &str, form: &str, params: Value) -> ApiResult {
        let params = require_record(params, UPDATE_PARAMS_REQUIRED)?;
        self.form_request(application, form, "update", params).await
    }

    /// Deletes the records of a form matching `criteria` in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn delete_records(&self, application: &str, form: &str, params: Value) -> ApiResult {
        self.form_request(application, form, "delete", params_record(params))
            .await
    }

    /// Lists the records shown in a view.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn view_records_in_view(&self, application: &str, view: &str, params: Value) -> ApiResult {
        self.view_request(application, view, params).await
    }

    /// Lists the fields of the form behind a view.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError`] on transport failure or an API error.
    pub async fn list_form_fields(&self, application: &str, view: &str, params: Value) -> ApiResult {
        self.view_request(application, view, params).await
    }

    /// Downloads a file (such as an image field) from the export host.
    ///
    /// `endpoint` is the file path on the export host. The body is returned
    /// as [`ResponseData::Binary`](crate::clients::ResponseData::Binary).
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::NoContent`] when the file is empty and
    /// [`ZohoError::Transport`] on transport failure.
    pub async fn download_image(&self, endpoint: &str, params: Value) -> ApiResult {
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, endpoint)
                    .params(params_record(params))
                    .download(true),
            )
            .await
    }

    async fn form_request(
        &self,
        application: &str,
        form: &str,
        action: &str,
        params: Record,
    ) -> ApiResult {
        let endpoint = format!("{application}/form/{form}/record/{action}/");
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Post, endpoint)
                    .params(params),
            )
            .await
    }

    async fn view_request(&self, application: &str, view: &str, params: Value) -> ApiResult {
        let endpoint = format!("{application}/view/{view}");
        self.http_client
            .send(
                self.http_client
                    .operation(HttpMethod::Get, endpoint)
                    .params(params_record(params)),
            )
            .await
    }
}

/// Field-value params must be a non-empty object.
fn require_record(params: Value, message: &str) -> Result<Record, ZohoError> {
    match require_payload(params, message)? {
        RecordPayload::Single(record) => Ok(record),
        RecordPayload::Many(_) => Err(ZohoError::validation(message)),
    }
}
