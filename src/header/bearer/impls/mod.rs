pub mod default_bearer_extractor;
