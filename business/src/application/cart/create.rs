use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use crate::domain::logger::Logger;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError> {
        let cart = Cart::new(params.owner);
        self.repository.save(&cart).await?;

        self.logger.info(&format!("Cart created: {}", cart.id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::value_objects::CartState;
    use crate::test_support::{MockCartRepo, mock_logger, test_user_id};

    #[tokio::test]
    async fn should_create_empty_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_save()
            .withf(|cart| cart.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(CreateCartParams { owner: None })
            .await
            .unwrap();

        assert_eq!(cart.state(), CartState::Empty);
        assert!(cart.owner.is_none());
    }

    #[tokio::test]
    async fn should_bind_owner_when_signed_in() {
        let mut repo = MockCartRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(CreateCartParams {
                owner: Some(test_user_id()),
            })
            .await
            .unwrap();

        assert_eq!(cart.owner, Some(test_user_id()));
    }
}
