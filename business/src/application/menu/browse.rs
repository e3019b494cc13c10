use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::{DEFAULT_OUTLET, MenuPage, OutletId};
use crate::domain::menu::repository::MenuCatalog;
use crate::domain::menu::use_cases::browse::{BrowseMenuParams, BrowseMenuUseCase};
use crate::domain::notifier::{Notification, Notifier};

pub struct BrowseMenuUseCaseImpl {
    pub catalog: Arc<dyn MenuCatalog>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseMenuUseCase for BrowseMenuUseCaseImpl {
    async fn execute(&self, params: BrowseMenuParams) -> Result<MenuPage, MenuError> {
        let outlet_id = params
            .outlet
            .unwrap_or_else(|| OutletId::from(DEFAULT_OUTLET));
        self.logger
            .info(&format!("Browsing menu for outlet: {}", outlet_id));

        let outlet = self
            .catalog
            .get_outlets()
            .await?
            .into_iter()
            .find(|o| o.id == outlet_id)
            .ok_or(MenuError::OutletNotFound)?;

        if outlet.coming_soon {
            self.notifier.notify(Notification::info(
                "Coming Soon!",
                format!("{} will be available soon.", outlet.name),
            ));
            return Err(MenuError::OutletComingSoon);
        }

        let items = self.catalog.get_items().await?;
        let page = MenuPage::build(outlet, &items, params.category.as_deref());

        self.logger.info(&format!(
            "Menu for {} ({}): {} items",
            page.outlet.id,
            page.selected_category,
            page.items.len()
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::model::{MenuItem, Outlet};
    use crate::test_support::{
        MockCatalog, expect_notice, menu_item, mock_logger, silent_notifier,
    };

    fn outlets() -> Vec<Outlet> {
        vec![
            Outlet {
                id: OutletId::from("kathi-junction"),
                name: "Kathi Junction".to_string(),
                coming_soon: false,
            },
            Outlet {
                id: OutletId::from("dominos"),
                name: "Dominos".to_string(),
                coming_soon: true,
            },
        ]
    }

    fn items() -> Vec<MenuItem> {
        let mut fries = menu_item("kj-4", 80);
        fries.category = "sides".to_string();
        vec![menu_item("kj-1", 120), fries]
    }

    fn catalog() -> MockCatalog {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_outlets().returning(|| Ok(outlets()));
        catalog.expect_get_items().returning(|| Ok(items()));
        catalog
    }

    #[tokio::test]
    async fn should_default_to_main_outlet() {
        let use_case = BrowseMenuUseCaseImpl {
            catalog: Arc::new(catalog()),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(BrowseMenuParams {
                outlet: None,
                category: None,
            })
            .await
            .unwrap();

        assert_eq!(page.outlet.id.as_str(), "kathi-junction");
        assert_eq!(page.categories, vec!["all", "rolls", "sides"]);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_category() {
        let use_case = BrowseMenuUseCaseImpl {
            catalog: Arc::new(catalog()),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(BrowseMenuParams {
                outlet: Some(OutletId::from("kathi-junction")),
                category: Some("sides".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.as_str(), "kj-4");
    }

    #[tokio::test]
    async fn should_notify_and_reject_coming_soon_outlet() {
        let use_case = BrowseMenuUseCaseImpl {
            catalog: Arc::new(catalog()),
            notifier: expect_notice("Coming Soon!"),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BrowseMenuParams {
                outlet: Some(OutletId::from("dominos")),
                category: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), MenuError::OutletComingSoon));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_outlet() {
        let use_case = BrowseMenuUseCaseImpl {
            catalog: Arc::new(catalog()),
            notifier: silent_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BrowseMenuParams {
                outlet: Some(OutletId::from("night-canteen")),
                category: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), MenuError::OutletNotFound));
    }
}
