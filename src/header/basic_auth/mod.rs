mod basic_auth_extractor;
mod basic_credentials;
mod impls;

pub use basic_auth_extractor::BasicAuthExtractor;
pub use basic_credentials::BasicCredentials;
pub use impls::default_basic_auth_extractor::{DefaultBasicAuthError, DefaultBasicAuthExtractor};
