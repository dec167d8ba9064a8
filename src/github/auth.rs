use secrecy::{ExposeSecret, SecretString};

// -------------------------------------------------------------------------------------------------
// Auth
// -------------------------------------------------------------------------------------------------
/// Supported forms of authentication
pub enum Auth {
    /// No authentication
    Unauthenticated,

    /// Authenticate with a GitHub Personal Access Token
    PersonalAccessToken(SecretString),
}

impl Auth {
    /// The value of the `Authorization` header for this authentication mechanism, if any.
    ///
    /// GitHub accepts personal access tokens in the `token <value>` form.
    pub(super) fn header_value(&self) -> Option<String> {
        match self {
            Auth::Unauthenticated => None,
            Auth::PersonalAccessToken(token) => Some(format!("token {}", token.expose_secret())),
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::Unauthenticated => write!(f, "Unauthenticated"),
            Auth::PersonalAccessToken(_) => write!(f, "PersonalAccessToken([REDACTED])"),
        }
    }
}
