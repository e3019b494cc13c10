use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::menu::model::{Dietary, MenuItem, MenuItemId, Outlet, OutletId};
use business::domain::menu::repository::MenuCatalog;

/// Catalog compiled into the binary. Only Kathi Junction is open for now.
pub struct StaticMenuCatalog {
    outlets: Vec<Outlet>,
    items: Vec<MenuItem>,
}

fn outlet(id: &str, name: &str, coming_soon: bool) -> Outlet {
    Outlet {
        id: OutletId::from(id),
        name: name.to_string(),
        coming_soon,
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    dietary: Dietary,
    best_seller: bool,
    category: &str,
) -> MenuItem {
    MenuItem {
        id: MenuItemId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        outlet: OutletId::from("kathi-junction"),
        category: category.to_string(),
        dietary,
        best_seller,
        available: true,
    }
}

impl StaticMenuCatalog {
    pub fn new() -> Self {
        Self {
            outlets: vec![
                outlet("kathi-junction", "Kathi Junction", false),
                outlet("southern", "Southern", true),
                outlet("snapeats", "SnapEats", true),
                outlet("dominos", "Dominos", true),
            ],
            items: vec![
                item(
                    "kj-1",
                    "Paneer Kathi Roll",
                    "Soft paneer with spices wrapped in a fresh paratha.",
                    120,
                    Dietary::Veg,
                    true,
                    "rolls",
                ),
                item(
                    "kj-2",
                    "Chicken Kathi Roll",
                    "Juicy chicken pieces marinated with spices and wrapped in a fresh paratha.",
                    150,
                    Dietary::NonVeg,
                    true,
                    "rolls",
                ),
                item(
                    "kj-3",
                    "Egg Kathi Roll",
                    "Delicious egg wrap with vegetables and special spices.",
                    100,
                    Dietary::NonVeg,
                    false,
                    "rolls",
                ),
                item(
                    "kj-4",
                    "French Fries",
                    "Crispy golden fries served with ketchup.",
                    80,
                    Dietary::Veg,
                    false,
                    "sides",
                ),
                item(
                    "kj-5",
                    "Masala Cola",
                    "Refreshing cola with a spicy twist.",
                    40,
                    Dietary::Veg,
                    false,
                    "beverages",
                ),
            ],
        }
    }
}

impl Default for StaticMenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuCatalog for StaticMenuCatalog {
    async fn get_outlets(&self) -> Result<Vec<Outlet>, RepositoryError> {
        Ok(self.outlets.clone())
    }

    async fn get_items(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        Ok(self.items.clone())
    }

    async fn get_item(&self, id: &MenuItemId) -> Result<MenuItem, RepositoryError> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
