use std::borrow::Cow;

use http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    error::AuthorizationErrorKind,
    header::{
        digest::{digest_extractor::DigestExtractor, digest_params::DigestParams},
        header_extractor::HeaderExtractor,
        scheme::strip_scheme,
        {DefaultHeaderError, DefaultHeaderExtractor},
    },
};

#[derive(Debug, Clone)]
pub struct DefaultDigestExtractor {
    // Not generic: the header name is always "Authorization"
    header_extractor: DefaultHeaderExtractor,
}

impl DefaultDigestExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::new(Cow::from(AUTHORIZATION.as_str())),
        }
    }

    fn extract_encoded_params(authorization: &str) -> Result<&str, DefaultDigestError> {
        strip_scheme(authorization, "Digest").ok_or(DefaultDigestError::Format)
    }
}

impl Default for DefaultDigestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestExtractor for DefaultDigestExtractor {
    type Error = DefaultDigestError;

    #[tracing::instrument(skip_all)]
    fn extract_digest(&self, headers: &HeaderMap) -> Result<DigestParams, Self::Error> {
        let authorization = self.header_extractor.extract_header(headers)?;
        let params = DigestParams::parse(Self::extract_encoded_params(authorization)?);

        tracing::trace!(count = params.len(), "Parsed digest parameters");

        Ok(params)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultDigestError {
    #[error("Authorization header extraction error: {0}")]
    Header(
        #[source]
        #[from]
        DefaultHeaderError,
    ),
    #[error("Authorization header is not in the form: `Digest key=value, ...`")]
    Format,
}

impl DefaultDigestError {
    pub const fn kind(&self) -> AuthorizationErrorKind {
        match self {
            Self::Header(err) => err.kind(),
            Self::Format => AuthorizationErrorKind::SchemeMismatch,
        }
    }
}
