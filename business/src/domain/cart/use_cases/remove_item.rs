use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::menu::model::MenuItemId;

pub struct RemoveCartItemParams {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError>;
}
