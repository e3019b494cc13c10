use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::{MenuPage, OutletId};

pub struct BrowseMenuParams {
    /// Defaults to the main outlet when absent.
    pub outlet: Option<OutletId>,
    pub category: Option<String>,
}

#[async_trait]
pub trait BrowseMenuUseCase: Send + Sync {
    async fn execute(&self, params: BrowseMenuParams) -> Result<MenuPage, MenuError>;
}
