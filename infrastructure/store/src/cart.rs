use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use business::domain::cart::model::{Cart, CartId};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Process-local cart storage. Carts live until deleted, the owner signs out,
/// or they sit idle long enough to be swept.
#[derive(Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError> {
        self.carts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        self.carts.write().await.insert(cart.id, cart.clone());
        Ok(())
    }

    async fn delete(&self, id: CartId) -> Result<(), RepositoryError> {
        self.carts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_by_owner(&self, owner: &UserId) -> Result<u64, RepositoryError> {
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, cart| cart.owner.as_ref() != Some(owner));
        let removed = (before - carts.len()) as u64;
        debug!("Removed {} carts owned by {}", removed, owner);
        Ok(removed)
    }

    async fn delete_idle(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, cart| cart.updated_at >= cutoff);
        let removed = (before - carts.len()) as u64;
        debug!("Removed {} carts idle since {}", removed, cutoff);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use business::domain::menu::model::{Dietary, MenuItem, MenuItemId, OutletId};

    fn fries() -> MenuItem {
        MenuItem {
            id: MenuItemId::from("kj-4"),
            name: "French Fries".to_string(),
            description: String::new(),
            price: 80,
            outlet: OutletId::from("kathi-junction"),
            category: "sides".to_string(),
            dietary: Dietary::Veg,
            best_seller: false,
            available: true,
        }
    }

    #[tokio::test]
    async fn should_return_saved_cart() {
        let repo = InMemoryCartRepository::new();
        let mut cart = Cart::new(None);
        cart.add_item(&fries());

        repo.save(&cart).await.unwrap();
        let stored = repo.get_by_id(cart.id).await.unwrap();

        assert_eq!(stored.subtotal(), 80);
        assert_eq!(stored.total_item_count(), 1);
    }

    #[tokio::test]
    async fn should_overwrite_on_save() {
        let repo = InMemoryCartRepository::new();
        let mut cart = Cart::new(None);
        repo.save(&cart).await.unwrap();

        cart.add_item(&fries());
        cart.add_item(&fries());
        repo.save(&cart).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get_by_id(cart.id).await.unwrap().total_item_count(), 2);
    }

    #[tokio::test]
    async fn should_fail_to_delete_missing_cart() {
        let repo = InMemoryCartRepository::new();

        let result = repo.delete(CartId::new()).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn should_only_delete_carts_of_given_owner() {
        let repo = InMemoryCartRepository::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        repo.save(&Cart::new(Some(alice.clone()))).await.unwrap();
        repo.save(&Cart::new(Some(alice.clone()))).await.unwrap();
        repo.save(&Cart::new(Some(bob.clone()))).await.unwrap();
        repo.save(&Cart::new(None)).await.unwrap();

        let removed = repo.delete_by_owner(&alice).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn should_sweep_idle_carts_of_any_owner() {
        let repo = InMemoryCartRepository::new();
        let now = Utc::now();
        let mut stale_anonymous = Cart::new(None);
        stale_anonymous.updated_at = now - TimeDelta::hours(2);
        let mut stale_owned = Cart::new(Some(UserId::new("alice")));
        stale_owned.updated_at = now - TimeDelta::hours(3);
        let fresh = Cart::new(None);
        repo.save(&stale_anonymous).await.unwrap();
        repo.save(&stale_owned).await.unwrap();
        repo.save(&fresh).await.unwrap();

        let removed = repo.delete_idle(now - TimeDelta::hours(1)).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.len().await, 1);
        assert!(repo.get_by_id(fresh.id).await.is_ok());
        assert_eq!(
            repo.get_by_id(stale_anonymous.id).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }
}
