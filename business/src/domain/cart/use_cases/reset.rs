use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};

pub struct ResetCartParams {
    pub cart_id: CartId,
}

#[async_trait]
pub trait ResetCartUseCase: Send + Sync {
    async fn execute(&self, params: ResetCartParams) -> Result<Cart, CartError>;
}
