use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::checkout::{CheckoutOutcome, READY_WINDOW_MINUTES};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutOutcome, CartError> {
        self.logger
            .info(&format!("Checking out cart: {}", params.cart_id));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        let outcome = cart.checkout(params.payment_method, &params.auth);

        match &outcome {
            CheckoutOutcome::LoginRequired => {
                self.notifier.notify(Notification::info(
                    "Login Required",
                    "Please login to place your order",
                ));
                self.logger
                    .info(&format!("Checkout of cart {} needs sign-in", cart.id));
            }
            CheckoutOutcome::Forbidden => {
                self.logger
                    .warn(&format!("Checkout of cart {} refused: owned by another user", cart.id));
            }
            CheckoutOutcome::Empty => {
                self.logger
                    .warn(&format!("Checkout of empty cart {}", cart.id));
            }
            CheckoutOutcome::Confirmed(confirmation) => {
                self.repository.save(&cart).await?;

                let (min, max) = READY_WINDOW_MINUTES;
                self.notifier.notify(Notification::info(
                    "Order Placed Successfully!",
                    format!(
                        "Your order will be ready in {}-{} minutes. Payment method: {}",
                        min, max, confirmation.payment_method
                    ),
                ));
                self.logger.info(&format!(
                    "Cart {} checked out: {} items, total {}",
                    cart.id, confirmation.item_count, confirmation.total
                ));
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::{AuthState, Identity};
    use crate::domain::cart::model::{Cart, CartId};
    use crate::domain::cart::value_objects::PaymentMethod;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::notifier::Notifier;
    use crate::test_support::{MockCartRepo, MockNotify, menu_item, mock_logger, test_user_id};

    fn sample_cart() -> Cart {
        let mut cart = Cart::new(None);
        cart.add_item(&menu_item("kj-1", 120));
        cart.add_item(&menu_item("kj-4", 80));
        cart
    }

    fn signed_in() -> AuthState {
        AuthState::Authenticated(Identity::new(test_user_id()))
    }

    fn notifier_expecting(title: &'static str, fragment: &'static str) -> Arc<dyn Notifier> {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(move |n| n.title == title && n.description.contains(fragment))
            .times(1)
            .returning(|_| ());
        Arc::new(notifier)
    }

    #[tokio::test]
    async fn should_confirm_order_with_delivery_fee() {
        let cart = sample_cart();
        let cart_id = cart.id;
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        repo.expect_save()
            .withf(|c| c.is_empty() && c.owner.is_some())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CheckoutUseCaseImpl {
            repository: Arc::new(repo),
            notifier: notifier_expecting("Order Placed Successfully!", "Payment method: upi"),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(CheckoutParams {
                cart_id,
                payment_method: PaymentMethod::Upi,
                auth: signed_in(),
            })
            .await
            .unwrap();

        let CheckoutOutcome::Confirmed(confirmation) = outcome else {
            panic!("expected a confirmation");
        };
        assert_eq!(confirmation.subtotal, 200);
        assert_eq!(confirmation.total, 220);
    }

    #[tokio::test]
    async fn should_require_login_without_touching_cart() {
        let cart = sample_cart();
        let cart_id = cart.id;
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        repo.expect_save().never();

        let use_case = CheckoutUseCaseImpl {
            repository: Arc::new(repo),
            notifier: notifier_expecting("Login Required", "Please login"),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(CheckoutParams {
                cart_id,
                payment_method: PaymentMethod::Card,
                auth: AuthState::Unauthenticated,
            })
            .await
            .unwrap();

        assert_eq!(outcome, CheckoutOutcome::LoginRequired);
    }

    #[tokio::test]
    async fn should_refuse_cart_owned_by_another_user() {
        let mut cart = sample_cart();
        cart.owner = Some(UserId::new("someone-else"));
        let cart_id = cart.id;
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        repo.expect_save().never();

        let mut notifier = MockNotify::new();
        notifier.expect_notify().never();

        let use_case = CheckoutUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(CheckoutParams {
                cart_id,
                payment_method: PaymentMethod::Card,
                auth: signed_in(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CheckoutOutcome::Forbidden);
    }

    #[tokio::test]
    async fn should_not_save_empty_cart() {
        let cart = Cart::new(None);
        let cart_id = cart.id;
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        repo.expect_save().never();

        let mut notifier = MockNotify::new();
        notifier.expect_notify().never();

        let use_case = CheckoutUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(CheckoutParams {
                cart_id,
                payment_method: PaymentMethod::Cash,
                auth: signed_in(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CheckoutOutcome::Empty);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut notifier = MockNotify::new();
        notifier.expect_notify().never();

        let use_case = CheckoutUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CheckoutParams {
                cart_id: CartId::new(),
                payment_method: PaymentMethod::Card,
                auth: signed_in(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
