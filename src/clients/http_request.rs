//! Request building for the Zoho API SDK.
//!
//! This module turns an operation name, an endpoint and a parameter mapping
//! into a fully formed [`Operation`]: method, host, path with query string,
//! headers and body. Building performs no I/O and never fails.
//!
//! All four products share one wire convention: the full parameter mapping,
//! auth fields included, is sent both as the query string and as a JSON
//! request body, even for GET requests.

use std::fmt;

use serde_json::Value;

use crate::clients::product::{AuthField, Product, QueryEncoding};
use crate::clients::record::Record;
use crate::config::{Protocol, ZohoConfig};
use crate::error::ConfigError;

/// Host serving Creator file downloads.
pub const CREATOR_EXPORT_HOST: &str = "creatorexport.zoho.com";

/// `Content-disposition` sent with Creator downloads.
const DOWNLOAD_DISPOSITION: &str = "attachment; filename=1427150341594_image.JPG";

/// Param keys kept out of the JSON body.
const SENTINEL_KEYS: [&str; 2] = ["path", "download"];

/// HTTP methods used by the Zoho APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Connection settings and resolved auth fields for one product client.
///
/// Created once at client construction; every [`Operation`] is built
/// against it.
#[derive(Clone, Debug)]
pub struct RequestContext {
    product: Product,
    protocol: Protocol,
    host: String,
    export_host: String,
    port: u16,
    auth_params: Vec<(&'static str, Value)>,
    cookie: Option<String>,
}

impl RequestContext {
    /// Resolves a product's connection settings and auth fields from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when the product needs a
    /// field the configuration does not provide (`portal` and `department`
    /// for Support).
    pub fn new(product: Product, config: &ZohoConfig) -> Result<Self, ConfigError> {
        let auth_params = product
            .auth_fields
            .iter()
            .map(|field| {
                let value = match field {
                    AuthField::AuthToken => Value::from(config.auth_token().as_ref()),
                    AuthField::Scope => Value::from(
                        config
                            .scope()
                            .or(product.default_scope)
                            .ok_or(ConfigError::MissingRequiredField { field: "scope" })?,
                    ),
                    AuthField::Raw => Value::Bool(true),
                    AuthField::Portal => Value::from(
                        config
                            .portal()
                            .ok_or(ConfigError::MissingRequiredField { field: "portal" })?,
                    ),
                    AuthField::Department => Value::from(
                        config
                            .department()
                            .ok_or(ConfigError::MissingRequiredField { field: "department" })?,
                    ),
                };
                Ok((field.param_name(), value))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            product,
            protocol: config.protocol(),
            host: config
                .host()
                .map_or(product.default_host, AsRef::as_ref)
                .to_string(),
            export_host: config
                .export_host()
                .map_or(CREATOR_EXPORT_HOST, AsRef::as_ref)
                .to_string(),
            port: config.port(),
            auth_params,
            cookie: None,
        })
    }

    /// Returns the product this context serves.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the session cookie, if one was set.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub(crate) fn set_cookie(&mut self, cookie: String) {
        self.cookie = Some(cookie);
    }
}

/// A fully formed request, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The transport protocol.
    pub protocol: Protocol,
    /// Target host.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Path including the query string.
    pub path: String,
    /// Every param sent in the query string, in order.
    pub params: Record,
    /// Request headers.
    pub headers: Vec<(String, String)>,
    /// Request body (JSON text, or empty for downloads).
    pub body: String,
    /// Whether the response is read as raw bytes.
    pub binary: bool,
}

impl Operation {
    /// Creates a new builder for an operation against `endpoint`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zoho_api::clients::{HttpMethod, Operation, Product, RequestContext};
    /// use zoho_api::{AuthToken, ZohoConfig};
    /// use serde_json::json;
    ///
    /// let config = ZohoConfig::builder()
    ///     .auth_token(AuthToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let context = RequestContext::new(Product::CRM, &config).unwrap();
    ///
    /// let operation = Operation::builder(HttpMethod::Get, "Leads/getRecords")
    ///     .param("fromIndex", json!(1))
    ///     .build(&context);
    ///
    /// assert_eq!(
    ///     operation.path,
    ///     "/crm/private/json/Leads/getRecords?fromIndex=1&authtoken=token&scope=crmapi"
    /// );
    /// ```
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(method, endpoint)
    }

    /// Returns the absolute URL for this operation.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol.scheme(),
            self.host,
            self.port,
            self.path
        )
    }

    /// Returns the value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builder for constructing [`Operation`] instances.
#[derive(Debug)]
pub struct OperationBuilder {
    http_method: HttpMethod,
    endpoint: String,
    params: Record,
    download: bool,
}

impl OperationBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            http_method: method,
            endpoint: endpoint.into(),
            params: Record::new(),
            download: false,
        }
    }

    /// Sets all caller params at once, replacing earlier ones.
    #[must_use]
    pub fn params(mut self, params: Record) -> Self {
        self.params = params;
        self
    }

    /// Adds a single param.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Marks the operation as a binary download from the export host.
    #[must_use]
    pub const fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Builds the [`Operation`] against the given context.
    ///
    /// Auth fields are appended after the caller params; a caller param with
    /// the same name keeps its position and takes the auth value.
    #[must_use]
    pub fn build(self, context: &RequestContext) -> Operation {
        let mut params = self.params;
        if self.download {
            params.insert("download".to_string(), Value::Bool(true));
        }
        for (name, value) in &context.auth_params {
            params.insert((*name).to_string(), value.clone());
        }

        let product = context.product;
        let (host, path, body) = if self.download {
            let query = encode_query(&params, QueryEncoding::Escaped);
            let path = format!("{}?{query}", self.endpoint);
            (context.export_host.clone(), path, String::new())
        } else {
            let query = encode_query(&params, product.query_encoding);
            let path = format!("{}{}?{query}", product.base_path, self.endpoint);
            (context.host.clone(), path, json_body(&params))
        };

        let mut headers = vec![("Content-Length".to_string(), body.len().to_string())];
        if let Some(cookie) = &context.cookie {
            headers.push(("Cookie".to_string(), cookie.clone()));
        }
        if self.download {
            headers.push((
                "Content-disposition".to_string(),
                DOWNLOAD_DISPOSITION.to_string(),
            ));
            headers.push(("Content-type".to_string(), "image/jpeg".to_string()));
        }

        Operation {
            http_method: self.http_method,
            protocol: context.protocol,
            host,
            port: context.port,
            path,
            params,
            headers,
            body,
            binary: self.download,
        }
    }
}

/// Renders params as JSON text, minus the sentinel keys.
fn json_body(params: &Record) -> String {
    let body: Record = params
        .iter()
        .filter(|(key, _)| !SENTINEL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(body).to_string()
}

/// Renders params as a query string in insertion order.
///
/// Nested objects and arrays are flattened with bracket keys
/// (`a[b]=1`, `a[0]=x`); `null` renders as an empty value.
#[must_use]
pub fn encode_query(params: &Record, encoding: QueryEncoding) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key, value, &mut pairs);
    }

    let encode = |s: &str| match encoding {
        QueryEncoding::Escaped => urlencoding::encode(s).into_owned(),
        QueryEncoding::Unescaped => encode_delimiters(s),
    };

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encodes only the characters that would split or end a query
/// parameter; everything else is left as written.
fn encode_delimiters(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            _ => out.push(c),
        }
    }
    out
}

fn flatten(key: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                flatten(&format!("{key}[{sub_key}]"), sub_value, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::String(s) => pairs.push((key.to_string(), s.clone())),
        Value::Null => pairs.push((key.to_string(), String::new())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
    }
}
