use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuCatalog;
use crate::domain::notifier::{Notification, Notifier};

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn MenuCatalog>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        let item = self
            .catalog
            .get_item(&params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        if !item.available {
            self.logger
                .warn(&format!("Item {} is not available", item.id));
            return Err(CartError::ItemUnavailable);
        }

        let quantity = cart.add_item(&item);
        self.repository.save(&cart).await?;

        self.notifier.notify(Notification::info(
            "Added to cart",
            format!("{} has been added to your cart.", item.name),
        ));
        self.logger.info(&format!(
            "Cart {} now holds {} x {}",
            cart.id, quantity, item.id
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartId;
    use crate::domain::menu::model::MenuItemId;
    use crate::test_support::{
        MockCartRepo, MockCatalog, expect_notice, menu_item, mock_logger, mock_notifier,
        silent_notifier,
    };

    fn repo_with(cart: Cart) -> MockCartRepo {
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        repo
    }

    #[tokio::test]
    async fn should_add_item_and_notify() {
        let cart = Cart::new(None);
        let cart_id = cart.id;
        let mut repo = repo_with(cart);
        repo.expect_save()
            .withf(|c| c.total_item_count() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_item()
            .returning(|id| Ok(menu_item(id.as_str(), 120)));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(catalog),
            notifier: expect_notice("Added to cart"),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id,
                item_id: MenuItemId::from("kj-1"),
            })
            .await;

        let cart = result.unwrap();
        assert_eq!(cart.quantity_of(&MenuItemId::from("kj-1")), 1);
        assert_eq!(cart.subtotal(), 120);
    }

    #[tokio::test]
    async fn should_increment_quantity_of_item_already_in_cart() {
        let mut cart = Cart::new(None);
        cart.add_item(&menu_item("kj-1", 120));
        let cart_id = cart.id;
        let mut repo = repo_with(cart);
        repo.expect_save().returning(|_| Ok(()));

        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_item()
            .returning(|id| Ok(menu_item(id.as_str(), 120)));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(catalog),
            notifier: mock_notifier(),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                cart_id,
                item_id: MenuItemId::from("kj-1"),
            })
            .await
            .unwrap();

        assert_eq!(cart.quantity_of(&MenuItemId::from("kj-1")), 2);
    }

    #[tokio::test]
    async fn should_reject_item_missing_from_catalog() {
        let repo = repo_with(Cart::new(None));
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_item()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(catalog),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id: CartId::new(),
                item_id: MenuItemId::from("kj-99"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_unavailable_item() {
        let repo = repo_with(Cart::new(None));
        let mut catalog = MockCatalog::new();
        catalog.expect_get_item().returning(|id| {
            let mut item = menu_item(id.as_str(), 100);
            item.available = false;
            Ok(item)
        });

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(catalog),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id: CartId::new(),
                item_id: MenuItemId::from("kj-3"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemUnavailable));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(MockCatalog::new()),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id: CartId::new(),
                item_id: MenuItemId::from("kj-1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
