use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Response, StatusCode};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{Credentials, Session, SessionEvent, SignUpProfile};
use business::domain::auth::provider::AuthProvider;

use crate::client::AuthClient;
use crate::dto::{ErrorResponse, PasswordGrantRequest, SignUpRequest, TokenResponse, UserResponse};

const EVENT_CAPACITY: usize = 64;

/// GoTrue-compatible auth provider. Publishes a [`SessionEvent`] for every
/// successful sign-in and sign-out.
pub struct GoTrueAuthProvider {
    client: AuthClient,
    events: broadcast::Sender<SessionEvent>,
}

impl GoTrueAuthProvider {
    pub fn new(client: AuthClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { client, events }
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("No session subscribers");
        }
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, AuthError> {
        request
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))
    }

    async fn error_message(response: Response) -> Option<String> {
        response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message)
    }

    async fn failure(response: Response) -> AuthError {
        let status = response.status();
        let message = Self::error_message(response)
            .await
            .unwrap_or_else(|| status.to_string());
        classify(status, message)
    }
}

/// Maps a non-success status to the error the caller can act on.
fn classify(status: StatusCode, message: String) -> AuthError {
    if status.is_server_error() {
        AuthError::Provider(message)
    } else {
        AuthError::Rejected(message)
    }
}

fn is_bad_credentials(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY
    )
}

#[async_trait]
impl AuthProvider for GoTrueAuthProvider {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        let request = self
            .client
            .get(self.client.user_url()?)
            .header("Authorization", AuthClient::bearer(access_token));
        let response = Self::send(request).await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        Ok(Some(Session {
            access_token: access_token.to_string(),
            refresh_token: None,
            expires_at: None,
            identity: user.into_identity(),
        }))
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let request = self
            .client
            .post(self.client.token_url()?)
            .json(&PasswordGrantRequest {
                email: &credentials.email,
                password: &credentials.password,
            });
        let response = Self::send(request).await?;

        let status = response.status();
        if !status.is_success() {
            if is_bad_credentials(status) {
                warn!("Password grant refused with {}", status);
                return Err(AuthError::InvalidCredentials);
            }
            return Err(Self::failure(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        let session = token.into_session(Utc::now());

        self.publish(SessionEvent::SignedIn(session.identity.clone()));
        Ok(session)
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        profile: &SignUpProfile,
    ) -> Result<(), AuthError> {
        let request = self
            .client
            .post(self.client.signup_url()?)
            .json(&SignUpRequest {
                email: &credentials.email,
                password: &credentials.password,
                data: profile,
            });
        let response = Self::send(request).await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(())
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let request = self
            .client
            .post(self.client.logout_url()?)
            .header("Authorization", AuthClient::bearer(&session.access_token));
        let response = Self::send(request).await?;

        // An already revoked token still ends the local session.
        if !response.status().is_success() && response.status() != StatusCode::UNAUTHORIZED {
            return Err(Self::failure(response).await);
        }

        self.publish(SessionEvent::SignedOut(session.identity.user_id.clone()));
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
