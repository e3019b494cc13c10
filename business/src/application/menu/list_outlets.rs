use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::Outlet;
use crate::domain::menu::repository::MenuCatalog;
use crate::domain::menu::use_cases::list_outlets::ListOutletsUseCase;

pub struct ListOutletsUseCaseImpl {
    pub catalog: Arc<dyn MenuCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOutletsUseCase for ListOutletsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Outlet>, MenuError> {
        let outlets = self.catalog.get_outlets().await?;
        self.logger
            .debug(&format!("Retrieved {} outlets", outlets.len()));
        Ok(outlets)
    }
}
