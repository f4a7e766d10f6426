use std::{borrow::Cow, string::FromUtf8Error};

use base64::Engine;
use http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    error::AuthorizationErrorKind,
    header::{
        basic_auth::basic_auth_extractor::BasicAuthExtractor,
        header_extractor::HeaderExtractor,
        impls::default_header_extractor::{DefaultHeaderError, DefaultHeaderExtractor},
        scheme::strip_scheme,
    },
};

#[derive(Debug, Clone)]
pub struct DefaultBasicAuthExtractor {
    // Not generic: the header name is always "Authorization"
    header_extractor: DefaultHeaderExtractor,
}

impl DefaultBasicAuthExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::new(Cow::from(AUTHORIZATION.as_str())),
        }
    }

    fn extract_encoded_basic(authorization: &str) -> Result<&str, DefaultBasicAuthError> {
        let encoded_basic =
            strip_scheme(authorization, "Basic").ok_or(DefaultBasicAuthError::Format)?;

        Ok(encoded_basic.trim())
    }

    fn decode(encoded_basic: &str) -> Result<String, DefaultBasicAuthError> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded_basic)
            .map_err(DefaultBasicAuthError::Decode)?;

        let decoded = String::from_utf8(decoded).map_err(DefaultBasicAuthError::Utf8)?;

        Ok(decoded)
    }

    fn split(basic_auth: String) -> Result<(String, String), DefaultBasicAuthError> {
        match basic_auth.split_once(':') {
            Some((username, password)) => Ok((username.to_string(), password.to_string())),
            None => Err(DefaultBasicAuthError::Colon),
        }
    }
}

impl Default for DefaultBasicAuthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicAuthExtractor for DefaultBasicAuthExtractor {
    type Error = DefaultBasicAuthError;

    #[tracing::instrument(skip_all)]
    fn extract_basic_auth(&self, headers: &HeaderMap) -> Result<(String, String), Self::Error> {
        let authorization = self.header_extractor.extract_header(headers)?;
        let encoded_basic = Self::extract_encoded_basic(authorization)?;
        let (username, password) = Self::split(Self::decode(encoded_basic)?)?;

        Ok((username, password))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultBasicAuthError {
    #[error("Authorization header extraction error: {0}")]
    Header(
        #[source]
        #[from]
        DefaultHeaderError,
    ),
    #[error("Authorization header is not in the form: `Basic xyz`")]
    Format,
    #[error("Authorization header base64 decode error: {0}")]
    Decode(base64::DecodeError),
    #[error("Authorization header utf-8 error: {0}")]
    Utf8(FromUtf8Error),
    #[error("Authorization header does not contain a colon")]
    Colon,
}

impl DefaultBasicAuthError {
    pub const fn kind(&self) -> AuthorizationErrorKind {
        match self {
            Self::Header(err) => err.kind(),
            Self::Format => AuthorizationErrorKind::SchemeMismatch,
            Self::Decode(_) | Self::Utf8(_) => AuthorizationErrorKind::MalformedEncoding,
            Self::Colon => AuthorizationErrorKind::MalformedStructure,
        }
    }
}
