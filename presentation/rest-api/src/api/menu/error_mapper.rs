use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuError::OutletNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "menu.outlet_not_found")
            }
            MenuError::OutletComingSoon => (
                StatusCode::CONFLICT,
                "Conflict",
                "menu.outlet_coming_soon",
            ),
            MenuError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}
