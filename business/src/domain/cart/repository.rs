use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Cart, CartId};

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no such cart exists.
    async fn delete(&self, id: CartId) -> Result<(), RepositoryError>;
    /// Drops every cart owned by `owner`, returning how many went away.
    async fn delete_by_owner(&self, owner: &UserId) -> Result<u64, RepositoryError>;
    /// Drops every cart last touched before `cutoff`, returning how many went away.
    async fn delete_idle(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
