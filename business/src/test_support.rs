//! Shared mockall doubles for the application layer tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use tokio::sync::broadcast;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Credentials, Session, SessionEvent, SignUpProfile};
use crate::domain::auth::provider::AuthProvider;
use crate::domain::cart::model::{Cart, CartId};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::menu::model::{Dietary, MenuItem, MenuItemId, Outlet, OutletId};
use crate::domain::menu::repository::MenuCatalog;
use crate::domain::notifier::{Notification, Notifier};
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn delete(&self, id: CartId) -> Result<(), RepositoryError>;
        async fn delete_by_owner(&self, owner: &UserId) -> Result<u64, RepositoryError>;
        async fn delete_idle(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl MenuCatalog for Catalog {
        async fn get_outlets(&self) -> Result<Vec<Outlet>, RepositoryError>;
        async fn get_items(&self) -> Result<Vec<MenuItem>, RepositoryError>;
        async fn get_item(&self, id: &MenuItemId) -> Result<MenuItem, RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    }
}

mock! {
    pub Provider {}

    #[async_trait]
    impl AuthProvider for Provider {
        async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;
        async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
        async fn sign_up(&self, credentials: &Credentials, profile: &SignUpProfile) -> Result<(), AuthError>;
        async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
        fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Notify {}

    impl Notifier for Notify {
        fn notify(&self, notification: Notification);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// A notifier that accepts anything.
pub fn mock_notifier() -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier.expect_notify().returning(|_| ());
    Arc::new(notifier)
}

/// A notifier that expects exactly one notice with the given title.
pub fn expect_notice(title: &'static str) -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier
        .expect_notify()
        .withf(move |n| n.title == title)
        .times(1)
        .returning(|_| ());
    Arc::new(notifier)
}

/// A notifier that fails the test if anything is sent.
pub fn silent_notifier() -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier.expect_notify().never();
    Arc::new(notifier)
}

pub fn menu_item(id: &str, price: u64) -> MenuItem {
    MenuItem {
        id: MenuItemId::from(id),
        name: format!("Item {}", id),
        description: String::new(),
        price,
        outlet: OutletId::from("kathi-junction"),
        category: "rolls".to_string(),
        dietary: Dietary::Veg,
        best_seller: false,
        available: true,
    }
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-id")
}
