use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
}
