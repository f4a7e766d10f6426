use super::digest_params::DigestParams;

/// The credential fields of a `Digest` authorization header.
///
/// Fields populate independently; a parameter missing from the header leaves
/// its field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigestCredentials {
    username: Option<String>,
    realm: Option<String>,
    nonce: Option<String>,
    uri: Option<String>,
    response: Option<String>,
    opaque: Option<String>,
}

impl DigestCredentials {
    pub const fn absent() -> Self {
        Self {
            username: None,
            realm: None,
            nonce: None,
            uri: None,
            response: None,
            opaque: None,
        }
    }

    pub fn from_params(params: &DigestParams) -> Self {
        let field = |key: &str| params.get(key).map(str::to_string);

        Self {
            username: field("username"),
            realm: field("realm"),
            nonce: field("nonce"),
            uri: field("uri"),
            response: field("response"),
            opaque: field("opaque"),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::absent()
    }
}
