use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::menu::model::MenuItemId;

pub struct AddCartItemParams {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
