//! HTTP engine shared by the product clients.
//!
//! This module provides the [`HttpClient`] type, which sends one built
//! [`Operation`] per call and normalizes the response for its product.

use crate::clients::errors::ZohoError;
use crate::clients::http_request::{HttpMethod, Operation, OperationBuilder, RequestContext};
use crate::clients::http_response::{normalize, ApiResult, RawBody};
use crate::clients::product::Product;
use crate::clients::record::RecordPayload;
use crate::clients::xml::serialize;
use crate::config::ZohoConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP engine for one Zoho product.
///
/// The engine handles:
/// - Resolving host, port and auth fields from configuration
/// - Building each [`Operation`] with the product's conventions
/// - Sending exactly one request per call
/// - Normalizing the response body per the product's response shape
///
/// HTTP status codes are not interpreted; the Zoho APIs report failures in
/// the body.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Product settings and resolved auth fields.
    context: RequestContext,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new engine for `product` from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when the product needs a
    /// field the configuration does not provide, and
    /// [`ConfigError::HttpClientInit`] when the TLS client cannot be built.
    pub fn new(product: Product, config: &ZohoConfig) -> Result<Self, ConfigError> {
        let context = RequestContext::new(product, config)?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("Zoho API Library v{SDK_VERSION} | Rust"))
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self { client, context })
    }

    /// Returns the request context.
    #[must_use]
    pub const fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Returns the product this engine serves.
    #[must_use]
    pub const fn product(&self) -> &Product {
        self.context.product()
    }

    /// Sets the session cookie sent with every later request.
    pub fn set_cookie(&mut self, cookie: impl Into<String>) {
        self.context.set_cookie(cookie.into());
    }

    /// Encodes records in the product's wire format.
    ///
    /// XML products get the `<root_tag><row ..>` document in their XML
    /// dialect; products without one (Invoice) get the records as JSON text.
    #[must_use]
    pub fn encode_records(&self, root_tag: &str, payload: &RecordPayload) -> String {
        match self.product().xml {
            Some(format) => serialize(root_tag, payload, format),
            None => payload.to_value().to_string(),
        }
    }

    /// Starts an operation against `endpoint`; finish it with [`HttpClient::send`].
    #[must_use]
    pub fn operation(&self, method: HttpMethod, endpoint: impl Into<String>) -> OperationBuilder {
        Operation::builder(method, endpoint)
    }

    /// Builds and sends an operation, returning the normalized result.
    ///
    /// # Errors
    ///
    /// Returns [`ZohoError::Transport`] when the request fails,
    /// [`ZohoError::NoContent`] for an empty body, and [`ZohoError::Api`]
    /// when the product reports a failure.
    pub async fn send(&self, builder: OperationBuilder) -> ApiResult {
        let operation = builder.build(&self.context);
        let product = self.product();
        let name = product.name;

        let result = match self.execute(&operation).await {
            Ok(body) => normalize(product.response, body),
            Err(e) => Err(ZohoError::Transport(e)),
        };

        match &result {
            Ok(response) => tracing::debug!(
                product = name,
                method = %operation.http_method,
                code = response.code,
                "Zoho request done"
            ),
            Err(e) => tracing::debug!(
                product = name,
                method = %operation.http_method,
                error = %e,
                "Zoho request failed"
            ),
        }

        result
    }

    /// Issues the request and reads the raw body.
    async fn execute(&self, operation: &Operation) -> Result<RawBody, reqwest::Error> {
        let url = operation.url();

        let mut req_builder = match operation.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // reqwest derives Content-Length from the body
        for (key, value) in &operation.headers {
            if !key.eq_ignore_ascii_case("content-length") {
                req_builder = req_builder.header(key, value);
            }
        }

        if !operation.body.is_empty() {
            req_builder = req_builder.body(operation.body.clone());
        }

        let res = req_builder.send().await?;

        if operation.binary {
            let bytes = res.bytes().await?;
            Ok(RawBody::Binary(bytes.to_vec()))
        } else {
            Ok(RawBody::Text(res.text().await?))
        }
    }
}
