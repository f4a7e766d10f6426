pub mod basic_auth;
pub mod bearer;
pub mod digest;
mod header_extractor;
mod impls;
mod scheme;

pub use header_extractor::HeaderExtractor;
pub use impls::default_header_extractor::{DefaultHeaderError, DefaultHeaderExtractor};
