use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderHistory;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderHistoryParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetOrderHistoryUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderHistoryParams) -> Result<OrderHistory, OrderError>;
}
