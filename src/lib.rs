//! # Zoho API Rust SDK
//!
//! Async clients for four Zoho products: CRM, Creator, Invoice and Support.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ZohoConfig`] and [`ZohoConfigBuilder`]
//! - Validated newtypes for the auth token and host
//! - One client per product, each adding its own auth fields and defaults
//! - Record-to-XML serialization for the XML-based products
//! - A uniform [`ApiResult`] for every call, whatever the product's response
//!   shape
//!
//! ## Quick Start
//!
//! ```rust
//! use zoho_api::{AuthToken, CrmClient, ZohoConfig};
//!
//! let config = ZohoConfig::builder()
//!     .auth_token(AuthToken::new("your-authtoken").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let crm = CrmClient::new(&config).unwrap();
//! assert_eq!(crm.http_client().context().host(), "crm.zoho.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use serde_json::json;
//! use zoho_api::{AuthToken, SupportClient, ZohoConfig, ZohoError};
//!
//! let config = ZohoConfig::builder()
//!     .auth_token(AuthToken::new("your-authtoken")?)
//!     .portal("acme")
//!     .department("Sales")
//!     .build()?;
//! let support = SupportClient::new(&config)?;
//!
//! match support.get_record_by_id("requests", json!({"id": "42"})).await {
//!     Ok(response) => println!("{:?}", response.data),
//!     Err(ZohoError::Api { code, message }) => eprintln!("{code:?}: {message}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; bad call
//!   arguments fail before any request is sent
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **One request per call**: No retries, no caching

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AuthToken, Host, Protocol, ZohoConfig, ZohoConfigBuilder};
pub use error::ConfigError;

// Re-export product clients and result types
pub use clients::{
    ApiResponse, ApiResult, CreatorClient, CrmClient, ErrorCode, InvoiceClient, ResponseData,
    SupportClient, ZohoError,
};
