use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderHistory;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase,
};

pub struct GetOrderHistoryUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderHistoryUseCase for GetOrderHistoryUseCaseImpl {
    async fn execute(&self, params: GetOrderHistoryParams) -> Result<OrderHistory, OrderError> {
        self.logger
            .info(&format!("Fetching order history for {}", params.user_id));

        let mut orders = self.repository.get_all(&params.user_id).await?;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));

        let history = OrderHistory::group(orders);
        self.logger.info(&format!(
            "Order history for {}: {} active, {} past, {} cancelled",
            params.user_id,
            history.active.len(),
            history.past.len(),
            history.cancelled.len()
        ));
        Ok(history)
    }
}
