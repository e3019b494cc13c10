use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct CreateCartParams {
    pub owner: Option<UserId>,
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError>;
}
