//! Product clients and the HTTP layer they share.
//!
//! Each Zoho product speaks a slightly different dialect of the same idea:
//! an authenticated request carrying records, and a JSON response whose
//! failure marker varies by product. This module holds the shared pieces and
//! one thin client per product.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CrmClient`], [`CreatorClient`], [`InvoiceClient`], [`SupportClient`]:
//!   the product clients
//! - [`Product`]: the per-product constants (host, base path, auth fields,
//!   XML dialect, response shape)
//! - [`HttpClient`]: the engine sending one request per call
//! - [`Operation`] and [`OperationBuilder`]: a fully resolved request
//! - [`serialize`]: the record-to-XML serializer
//! - [`normalize`]: the response normalizer
//! - [`ZohoError`]: the error returned by every API call
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use zoho_api::clients::{encode_query, QueryEncoding};
//!
//! let params = json!({"criteria": "Status == Open", "raw": true});
//! let query = encode_query(params.as_object().unwrap(), QueryEncoding::Escaped);
//!
//! assert_eq!(query, "criteria=Status%20%3D%3D%20Open&raw=true");
//! ```
//!
//! # Response Handling
//!
//! HTTP status codes are not interpreted. An empty body is always
//! [`ZohoError::NoContent`]; a body that is not valid JSON is read as `{}`.

mod creator;
mod crm;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod invoice;
mod product;
mod record;
mod support;
mod xml;

pub use creator::CreatorClient;
pub use crm::CrmClient;
pub use errors::{
    ErrorCode, ZohoError, CREATE_PARAMS_REQUIRED, DELETE_ID_REQUIRED, GET_ID_REQUIRED,
    NO_CONTENT, UPDATE_ID_REQUIRED, UPDATE_PARAMS_REQUIRED,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    encode_query, HttpMethod, Operation, OperationBuilder, RequestContext, CREATOR_EXPORT_HOST,
};
pub use http_response::{normalize, ApiResponse, ApiResult, RawBody, ResponseData};
pub use invoice::InvoiceClient;
pub use product::{AuthField, Product, QueryEncoding, ResponseShape};
pub use record::{Record, RecordPayload};
pub use support::SupportClient;
pub use xml::{serialize, XmlFormat};
