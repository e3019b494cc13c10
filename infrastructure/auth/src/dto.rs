use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{Identity, Role, Session, SignUpProfile};
use business::domain::shared::value_objects::UserId;

#[derive(Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: &'a SignUpProfile,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserMetadata {
    pub role: Option<String>,
    pub member_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl UserResponse {
    pub fn into_identity(self) -> Identity {
        Identity {
            user_id: UserId::new(self.id),
            email: self.email.filter(|e| !e.is_empty()),
            role: self
                .user_metadata
                .role
                .and_then(|r| r.parse::<Role>().ok()),
            member_id: self.user_metadata.member_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub expires_at: Option<i64>,
    pub user: UserResponse,
}

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            identity: self.user.into_identity(),
        }
    }
}

/// Error bodies differ between provider versions.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    pub error_description: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
