mod expiry_checker;

pub use expiry_checker::{ExpiryChecker, ExpiryError};
