use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderHistoryResponse;
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
}

impl OrderApi {
    pub fn new(get_history_use_case: Arc<dyn GetOrderHistoryUseCase>) -> Self {
        Self {
            get_history_use_case,
        }
    }
}

#[OpenApi]
impl OrderApi {
    /// Order history
    ///
    /// The caller's orders grouped into active, past and cancelled.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn history(&self, auth: BearerAuth) -> OrderHistoryResult {
        let params = GetOrderHistoryParams {
            user_id: auth.0.identity.user_id,
        };

        match self.get_history_use_case.execute(params).await {
            Ok(history) => OrderHistoryResult::Ok(Json(history.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                OrderHistoryResult::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderHistoryResult {
    #[oai(status = 200)]
    Ok(Json<OrderHistoryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
