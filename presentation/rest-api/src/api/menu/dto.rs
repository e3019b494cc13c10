use poem_openapi::Object;

use business::domain::menu::model::{MenuItem, MenuPage, Outlet};

#[derive(Debug, Clone, Object)]
pub struct OutletResponse {
    pub id: String,
    pub name: String,
    /// Listed but not taking orders yet
    pub coming_soon: bool,
}

impl From<Outlet> for OutletResponse {
    fn from(outlet: Outlet) -> Self {
        Self {
            id: outlet.id.to_string(),
            name: outlet.name,
            coming_soon: outlet.coming_soon,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in minor currency units
    pub price: u64,
    pub category: String,
    /// "veg" or "non_veg"
    pub dietary: String,
    pub best_seller: bool,
    pub available: bool,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            dietary: item.dietary.to_string(),
            best_seller: item.best_seller,
            available: item.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuPageResponse {
    pub outlet: OutletResponse,
    /// "all" followed by the outlet's categories
    pub categories: Vec<String>,
    pub selected_category: String,
    pub items: Vec<MenuItemResponse>,
}

impl From<MenuPage> for MenuPageResponse {
    fn from(page: MenuPage) -> Self {
        Self {
            outlet: page.outlet.into(),
            categories: page.categories,
            selected_category: page.selected_category,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
