mod bearer_extractor;
mod impls;

pub use bearer_extractor::BearerExtractor;
pub use impls::default_bearer_extractor::{DefaultBearerError, DefaultBearerExtractor};
