mod digest_credentials;
mod digest_extractor;
mod digest_params;
mod impls;

pub use digest_credentials::DigestCredentials;
pub use digest_extractor::DigestExtractor;
pub use digest_params::DigestParams;
pub use impls::default_digest_extractor::{DefaultDigestError, DefaultDigestExtractor};
