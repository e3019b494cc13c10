use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::model::Role;
use business::domain::auth::use_cases::get_session::{GetSessionParams, GetSessionUseCase};
use business::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use business::domain::auth::use_cases::sign_out::{SignOutParams, SignOutUseCase};
use business::domain::auth::use_cases::sign_up::{SignUpParams, SignUpUseCase};

use crate::api::auth::dto::{IdentityResponse, SessionResponse, SignInRequest, SignUpRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    sign_in_use_case: Arc<dyn SignInUseCase>,
    sign_up_use_case: Arc<dyn SignUpUseCase>,
    sign_out_use_case: Arc<dyn SignOutUseCase>,
    get_session_use_case: Arc<dyn GetSessionUseCase>,
}

impl AuthApi {
    pub fn new(
        sign_in_use_case: Arc<dyn SignInUseCase>,
        sign_up_use_case: Arc<dyn SignUpUseCase>,
        sign_out_use_case: Arc<dyn SignOutUseCase>,
        get_session_use_case: Arc<dyn GetSessionUseCase>,
    ) -> Self {
        Self {
            sign_in_use_case,
            sign_up_use_case,
            sign_out_use_case,
            get_session_use_case,
        }
    }
}

/// Sign-in, registration and session lookup
#[OpenApi]
impl AuthApi {
    /// Sign in with email and password
    #[oai(path = "/auth/sign-in", method = "post", tag = "ApiTags::Auth")]
    async fn sign_in(&self, body: Json<SignInRequest>) -> SignInResponse {
        let params = SignInParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.sign_in_use_case.execute(params).await {
            Ok(session) => SignInResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignInResponse::BadRequest(json),
                    401 => SignInResponse::Unauthorized(json),
                    422 => SignInResponse::Rejected(json),
                    _ => SignInResponse::ProviderError(json),
                }
            }
        }
    }

    /// Register a student or staff account
    ///
    /// The provider sends a verification email; no session is returned.
    #[oai(path = "/auth/sign-up", method = "post", tag = "ApiTags::Auth")]
    async fn sign_up(&self, body: Json<SignUpRequest>) -> SignUpResponse {
        let role = match body.0.role.trim().to_lowercase().parse::<Role>() {
            Ok(role) => role,
            Err(_) => {
                return SignUpResponse::BadRequest(ErrorResponse::new(
                    "ValidationError",
                    "auth.invalid_role",
                ));
            }
        };
        let params = SignUpParams {
            email: body.0.email,
            password: body.0.password,
            confirm_password: body.0.confirm_password,
            role,
            member_id: body.0.member_id,
        };

        match self.sign_up_use_case.execute(params).await {
            Ok(()) => SignUpResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignUpResponse::BadRequest(json),
                    422 => SignUpResponse::Rejected(json),
                    _ => SignUpResponse::ProviderError(json),
                }
            }
        }
    }

    /// Sign out
    ///
    /// Revokes the session and discards every cart the caller owns.
    #[oai(path = "/auth/sign-out", method = "post", tag = "ApiTags::Auth")]
    async fn sign_out(&self, auth: BearerAuth) -> SignOutResponse {
        let params = SignOutParams {
            session: auth.0.into_session(),
        };

        match self.sign_out_use_case.execute(params).await {
            Ok(()) => SignOutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SignOutResponse::ProviderError(json)
            }
        }
    }

    /// Current identity
    ///
    /// Asks the provider whether the token is still valid.
    #[oai(path = "/auth/session", method = "get", tag = "ApiTags::Auth")]
    async fn session(&self, auth: BearerAuth) -> GetSessionResponse {
        let params = GetSessionParams {
            access_token: auth.0.access_token,
        };

        match self.get_session_use_case.execute(params).await {
            Ok(Some(session)) => GetSessionResponse::Ok(Json(session.identity.into())),
            Ok(None) => GetSessionResponse::Unauthorized(ErrorResponse::new(
                "Unauthorized",
                "auth.unauthenticated",
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSessionResponse::ProviderError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignInResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 422)]
    Rejected(Json<ErrorResponse>),
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignUpResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    Rejected(Json<ErrorResponse>),
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignOutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<IdentityResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}
