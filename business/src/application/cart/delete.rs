use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.repository
            .delete(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        self.logger
            .info(&format!("Cart discarded: {}", params.cart_id));
        Ok(())
    }
}
