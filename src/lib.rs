#![deny(unsafe_code, missing_debug_implementations)]

//! Extract Basic, Bearer and Digest credentials from the http `Authorization`
//! header, and check JWT expiry without verifying signatures.
//!
//! The functions in [`authorization`] never fail: a missing or malformed
//! header yields an absent result. The extractor traits in [`header`] expose
//! the underlying errors for callers that need them.
//!
//! ```rust
//! use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
//! use http_authorization::{bearer_token, TracingLogger};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
//!
//! assert_eq!(bearer_token(&headers, Some(&TracingLogger)).as_deref(), Some("abc"));
//! ```

pub mod authorization;
pub mod error;
pub mod header;
pub mod logger;
pub mod token;

pub use authorization::{basic_credentials, bearer_token, digest_credentials, is_token_expired};
pub use error::AuthorizationErrorKind;
pub use header::{basic_auth::BasicCredentials, digest::DigestCredentials};
pub use logger::{Logger, NoopLogger, TracingLogger};
