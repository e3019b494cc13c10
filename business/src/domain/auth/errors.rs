#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.password_empty")]
    PasswordEmpty,
    #[error("auth.password_mismatch")]
    PasswordMismatch,
    #[error("auth.unauthenticated")]
    Unauthenticated,
    /// The provider understood the request and refused it.
    #[error("auth.rejected")]
    Rejected(String),
    /// Network failure or unexpected provider response.
    #[error("auth.provider_unavailable")]
    Provider(String),
}

impl AuthError {
    /// Human readable detail suitable for a notification, when one exists.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::InvalidCredentials => Some("Invalid login credentials"),
            AuthError::InvalidEmail => Some("Please enter a valid email address."),
            AuthError::PasswordEmpty => Some("Password cannot be empty."),
            AuthError::PasswordMismatch => Some("Passwords do not match."),
            AuthError::Unauthenticated => None,
            AuthError::Rejected(message) | AuthError::Provider(message) => {
                Some(message.as_str()).filter(|m| !m.trim().is_empty())
            }
        }
    }
}
