//! Per-product capability descriptors.
//!
//! The four Zoho products share one request/response engine. Everything that
//! differs between them (default host, base path, auth fields, XML format,
//! response shape and query encoding) lives in a [`Product`] constant.

use crate::clients::xml::XmlFormat;

/// An authentication field injected into every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    /// `authtoken`, from the configured auth token.
    AuthToken,
    /// `scope`, from the configured or default scope.
    Scope,
    /// `raw=true`, a fixed marker.
    Raw,
    /// `portal`, from the configured portal.
    Portal,
    /// `department`, from the configured department.
    Department,
}

impl AuthField {
    /// Returns the query parameter name for this field.
    #[must_use]
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::AuthToken => "authtoken",
            Self::Scope => "scope",
            Self::Raw => "raw",
            Self::Portal => "portal",
            Self::Department => "department",
        }
    }
}

/// How a product reports success and failure in its JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"response": {"error": ..} | {"nodata": ..} | {"result": ..}}`.
    Envelope {
        /// Whether `response.nodata` is reported as a failure.
        nodata_is_error: bool,
        /// Field of `result` holding the success code.
        code_field: &'static str,
        /// Field of `result` holding the data, falling back to `result`.
        data_field: &'static str,
    },
    /// Failure when a top-level `message` is present.
    MessageMarker,
    /// Failure when a top-level `code` is present and not 0.
    StatusCode,
}

/// How the query string is rendered into the request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Standard percent-encoding.
    Escaped,
    /// Written as-is except `#`, `%`, `&`, `+` and `=`, which stay
    /// percent-encoded (Creator API calls).
    Unescaped,
}

/// Capability descriptor for one Zoho product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    /// Short name, logged as the `product` field.
    pub name: &'static str,
    /// Host used when none is configured.
    pub default_host: &'static str,
    /// Scope used when none is configured.
    pub default_scope: Option<&'static str>,
    /// Path prefix for API endpoints.
    pub base_path: &'static str,
    /// Auth fields appended to every request, in order.
    pub auth_fields: &'static [AuthField],
    /// XML format for record payloads, if the product takes XML.
    pub xml: Option<XmlFormat>,
    /// Response shape used by the normalizer.
    pub response: ResponseShape,
    /// Query string encoding for API calls.
    pub query_encoding: QueryEncoding,
}

impl Product {
    /// Zoho CRM.
    pub const CRM: Self = Self {
        name: "crm",
        default_host: "crm.zoho.com",
        default_scope: Some("crmapi"),
        base_path: "/crm/private/json/",
        auth_fields: &[AuthField::AuthToken, AuthField::Scope],
        xml: Some(XmlFormat::CRM),
        response: ResponseShape::Envelope {
            nodata_is_error: true,
            code_field: "code",
            data_field: "recorddetail",
        },
        query_encoding: QueryEncoding::Escaped,
    };

    /// Zoho Creator.
    pub const CREATOR: Self = Self {
        name: "creator",
        default_host: "creator.zoho.com",
        default_scope: Some("creatorapi"),
        base_path: "/api/json/",
        auth_fields: &[AuthField::AuthToken, AuthField::Scope, AuthField::Raw],
        xml: Some(XmlFormat::CREATOR),
        response: ResponseShape::MessageMarker,
        query_encoding: QueryEncoding::Unescaped,
    };

    /// Zoho Invoice.
    pub const INVOICE: Self = Self {
        name: "invoice",
        default_host: "invoice.zoho.com",
        default_scope: None,
        base_path: "/api/v3/",
        auth_fields: &[AuthField::AuthToken],
        xml: None,
        response: ResponseShape::StatusCode,
        query_encoding: QueryEncoding::Escaped,
    };

    /// Zoho Support.
    pub const SUPPORT: Self = Self {
        name: "support",
        default_host: "support.zoho.com",
        default_scope: None,
        base_path: "/api/json/",
        auth_fields: &[AuthField::Portal, AuthField::AuthToken, AuthField::Department],
        xml: Some(XmlFormat::SUPPORT),
        response: ResponseShape::Envelope {
            nodata_is_error: false,
            code_field: "responsecode",
            data_field: "responsedata",
        },
        query_encoding: QueryEncoding::Escaped,
    };
}
