pub mod default_digest_extractor;
