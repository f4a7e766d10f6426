/// Coarse classification shared by every extractor error.
///
/// None of these are exceptional: the public operations in [`crate::authorization`]
/// turn each of them into an absent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationErrorKind {
    /// The `Authorization` header is not present.
    HeaderMissing,
    /// The header is present but does not start with the expected scheme.
    SchemeMismatch,
    /// The header value, or its payload, is not valid ASCII, base64 or UTF-8.
    MalformedEncoding,
    /// The payload decoded but does not have the expected shape.
    MalformedStructure,
}

impl AuthorizationErrorKind {
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::HeaderMissing)
    }
}
