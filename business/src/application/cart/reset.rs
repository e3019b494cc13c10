use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::reset::{ResetCartParams, ResetCartUseCase};
use crate::domain::logger::Logger;

pub struct ResetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetCartUseCase for ResetCartUseCaseImpl {
    async fn execute(&self, params: ResetCartParams) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        cart.reset();
        self.repository.save(&cart).await?;

        self.logger.info(&format!("Cart reset: {}", cart.id));
        Ok(cart)
    }
}
