use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        if cart.quantity_of(&params.item_id) == 0 {
            self.logger.debug(&format!(
                "Item {} not in cart {}, nothing to remove",
                params.item_id, cart.id
            ));
            return Ok(cart);
        }

        let remaining = cart.remove_item(&params.item_id);
        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Removed one {} from cart {} ({} left)",
            params.item_id, cart.id, remaining
        ));
        Ok(cart)
    }
}
