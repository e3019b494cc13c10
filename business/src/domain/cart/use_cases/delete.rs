use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartId;

pub struct DeleteCartParams {
    pub cart_id: CartId,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError>;
}
