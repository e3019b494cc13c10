use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{MenuItem, MenuItemId, Outlet};

/// Read-only access to the menu catalog.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn get_outlets(&self) -> Result<Vec<Outlet>, RepositoryError>;
    async fn get_items(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn get_item(&self, id: &MenuItemId) -> Result<MenuItem, RepositoryError>;
}
