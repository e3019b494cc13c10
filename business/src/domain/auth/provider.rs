use async_trait::async_trait;
use tokio::sync::broadcast;

use super::errors::AuthError;
use super::model::{Credentials, Session, SessionEvent, SignUpProfile};

/// Port to the external identity service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves an access token; `Ok(None)` when the token is no longer valid.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    /// Registration may require email verification, so no session is returned.
    async fn sign_up(
        &self,
        credentials: &Credentials,
        profile: &SignUpProfile,
    ) -> Result<(), AuthError>;
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
}
