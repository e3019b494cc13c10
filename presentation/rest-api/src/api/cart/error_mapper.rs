use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.not_found"),
            CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found")
            }
            CartError::ItemUnavailable => (
                StatusCode::CONFLICT,
                "Conflict",
                "cart.item_unavailable",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}
