use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::auth::model::{Identity, Session};

#[derive(Debug, Clone, Object)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// "student" or "staff"
    pub role: String,
    /// Student or staff number
    #[oai(skip_serializing_if_is_none)]
    pub member_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct IdentityResponse {
    pub user_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub member_id: Option<String>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id.to_string(),
            email: identity.email,
            role: identity.role.map(|r| r.to_string()),
            member_id: identity.member_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub access_token: String,
    #[oai(skip_serializing_if_is_none)]
    pub refresh_token: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: IdentityResponse,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_at: session.expires_at,
            user: session.identity.into(),
        }
    }
}
