/// Username and password taken from a `Basic` authorization header.
///
/// Either both fields are present or both are absent.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BasicCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "..."))
            .finish()
    }
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    pub const fn absent() -> Self {
        Self {
            username: None,
            password: None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub const fn is_absent(&self) -> bool {
        self.username.is_none()
    }

    pub fn into_pair(self) -> Option<(String, String)> {
        self.username.zip(self.password)
    }
}

impl<U, P> From<(U, P)> for BasicCredentials
where
    U: Into<String>,
    P: Into<String>,
{
    fn from(value: (U, P)) -> Self {
        Self::new(value.0, value.1)
    }
}
