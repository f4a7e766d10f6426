use http::HeaderMap;

use super::digest_params::DigestParams;

pub trait DigestExtractor {
    type Error;

    fn extract_digest(&self, headers: &HeaderMap) -> Result<DigestParams, Self::Error>;
}
