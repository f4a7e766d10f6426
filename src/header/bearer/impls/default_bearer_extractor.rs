use std::borrow::Cow;

use http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    error::AuthorizationErrorKind,
    header::{
        bearer::bearer_extractor::BearerExtractor,
        header_extractor::HeaderExtractor,
        scheme::strip_scheme,
        {DefaultHeaderError, DefaultHeaderExtractor},
    },
};

#[derive(Debug, Clone)]
pub struct DefaultBearerExtractor {
    // Not generic: the header name is always "Authorization"
    header_extractor: DefaultHeaderExtractor,
}

impl DefaultBearerExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::new(Cow::from(AUTHORIZATION.as_str())),
        }
    }

    /// Returns the token following `Bearer `, trimmed but otherwise untouched.
    pub fn extract_bearer_token(authorization: &str) -> Result<&str, DefaultBearerError> {
        let bearer_token =
            strip_scheme(authorization, "Bearer").ok_or(DefaultBearerError::Format)?;

        Ok(bearer_token.trim())
    }
}

impl Default for DefaultBearerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BearerExtractor for DefaultBearerExtractor {
    type Error = DefaultBearerError;

    #[tracing::instrument(skip_all)]
    fn extract_bearer<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error> {
        let authorization = self.header_extractor.extract_header(headers)?;
        let bearer_token = Self::extract_bearer_token(authorization)?;

        Ok(bearer_token)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultBearerError {
    #[error("Authorization header extraction error: {0}")]
    Header(
        #[source]
        #[from]
        DefaultHeaderError,
    ),
    #[error("Authorization header is not in the form: `Bearer xyz`")]
    Format,
}

impl DefaultBearerError {
    pub const fn kind(&self) -> AuthorizationErrorKind {
        match self {
            Self::Header(err) => err.kind(),
            Self::Format => AuthorizationErrorKind::SchemeMismatch,
        }
    }
}
