use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::Outlet;

#[async_trait]
pub trait ListOutletsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Outlet>, MenuError>;
}
