use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::InvalidEmail | AuthError::PasswordEmpty | AuthError::PasswordMismatch => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            AuthError::Rejected(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Rejected"),
            AuthError::Provider(_) => (StatusCode::BAD_GATEWAY, "ProviderError"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
