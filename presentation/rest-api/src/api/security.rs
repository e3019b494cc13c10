use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::Deserialize;

use business::domain::auth::model::{AuthState, Identity, Role, Session};
use business::domain::shared::value_objects::UserId;

const AUDIENCE: &str = "authenticated";

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: ClaimsMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ClaimsMetadata {
    role: Option<String>,
    member_id: Option<String>,
}

/// Verifies provider-issued access tokens without a network round trip.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Identity, String> {
        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;
        let claims = data.claims;

        Ok(Identity {
            user_id: UserId::new(claims.sub),
            email: claims.email.filter(|e| !e.is_empty()),
            role: claims
                .user_metadata
                .role
                .and_then(|r| r.parse::<Role>().ok()),
            member_id: claims.user_metadata.member_id,
        })
    }

    /// Resolves an optional `Authorization` header. A missing or invalid
    /// token means the caller is anonymous.
    pub fn resolve(&self, authorization: Option<&str>) -> AuthState {
        let Some(token) = authorization.and_then(strip_bearer) else {
            return AuthState::Unauthenticated;
        };
        match self.verify(token) {
            Ok(identity) => AuthState::Authenticated(identity),
            Err(e) => {
                tracing::warn!("Ignoring invalid bearer token: {e}");
                AuthState::Unauthenticated
            }
        }
    }
}

fn strip_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// A caller whose bearer token passed verification.
#[derive(Debug, Clone)]
pub struct Caller {
    pub identity: Identity,
    pub access_token: String,
}

impl Caller {
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: None,
            expires_at: None,
            identity: self.identity,
        }
    }
}

/// Provider access token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub Caller);

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<Caller> {
    let Some(verifier) = req.data::<Arc<JwtVerifier>>() else {
        tracing::error!("JwtVerifier missing from request data");
        return None;
    };

    match verifier.verify(&bearer.token) {
        Ok(identity) => Some(Caller {
            identity,
            access_token: bearer.token,
        }),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
