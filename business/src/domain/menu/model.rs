use serde::{Deserialize, Serialize};

/// Category selector that matches every item of an outlet.
pub const ALL_CATEGORIES: &str = "all";

/// The outlet shown when the caller does not pick one.
pub const DEFAULT_OUTLET: &str = "kathi-junction";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutletId(String);

impl OutletId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OutletId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dietary {
    Veg,
    NonVeg,
}

impl std::fmt::Display for Dietary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dietary::Veg => write!(f, "veg"),
            Dietary::NonVeg => write!(f, "non_veg"),
        }
    }
}

impl std::str::FromStr for Dietary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(Dietary::Veg),
            "non_veg" => Ok(Dietary::NonVeg),
            _ => Err(format!("Invalid dietary flag: {}", s)),
        }
    }
}

/// Immutable catalog record. Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub outlet: OutletId,
    pub category: String,
    pub dietary: Dietary,
    pub best_seller: bool,
    pub available: bool,
}

/// A campus food counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: OutletId,
    pub name: String,
    pub coming_soon: bool,
}

/// One outlet's slice of the menu, filtered by category.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuPage {
    pub outlet: Outlet,
    /// `"all"` followed by the outlet's categories in first-seen order.
    pub categories: Vec<String>,
    pub selected_category: String,
    pub items: Vec<MenuItem>,
}

impl MenuPage {
    pub fn build(outlet: Outlet, items: &[MenuItem], category: Option<&str>) -> Self {
        let outlet_items: Vec<&MenuItem> =
            items.iter().filter(|item| item.outlet == outlet.id).collect();

        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &outlet_items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }

        let selected_category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL_CATEGORIES)
            .to_string();

        let items = outlet_items
            .into_iter()
            .filter(|item| selected_category == ALL_CATEGORIES || item.category == selected_category)
            .cloned()
            .collect();

        Self {
            outlet,
            categories,
            selected_category,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, outlet: &str, category: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::from(id),
            name: format!("Item {}", id),
            description: String::new(),
            price: 100,
            outlet: OutletId::from(outlet),
            category: category.to_string(),
            dietary: Dietary::Veg,
            best_seller: false,
            available: true,
        }
    }

    fn kathi_junction() -> Outlet {
        Outlet {
            id: OutletId::from("kathi-junction"),
            name: "Kathi Junction".to_string(),
            coming_soon: false,
        }
    }

    fn catalog() -> Vec<MenuItem> {
        vec![
            item("kj-1", "kathi-junction", "rolls"),
            item("kj-4", "kathi-junction", "sides"),
            item("kj-2", "kathi-junction", "rolls"),
            item("so-1", "southern", "dosa"),
        ]
    }

    #[test]
    fn should_list_categories_in_first_seen_order() {
        let page = MenuPage::build(kathi_junction(), &catalog(), None);

        assert_eq!(page.categories, vec!["all", "rolls", "sides"]);
    }

    #[test]
    fn should_return_every_outlet_item_when_category_is_all() {
        let page = MenuPage::build(kathi_junction(), &catalog(), Some("all"));

        assert_eq!(page.items.len(), 3);
        assert!(page.items.iter().all(|i| i.outlet.as_str() == "kathi-junction"));
    }

    #[test]
    fn should_filter_items_by_category() {
        let page = MenuPage::build(kathi_junction(), &catalog(), Some("rolls"));

        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["kj-1", "kj-2"]);
        assert_eq!(page.selected_category, "rolls");
    }

    #[test]
    fn should_return_no_items_for_unknown_category() {
        let page = MenuPage::build(kathi_junction(), &catalog(), Some("desserts"));

        assert!(page.items.is_empty());
    }

    #[test]
    fn should_treat_blank_category_as_all() {
        let page = MenuPage::build(kathi_junction(), &catalog(), Some("  "));

        assert_eq!(page.selected_category, ALL_CATEGORIES);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn should_parse_dietary_flag() {
        assert_eq!("non_veg".parse::<Dietary>(), Ok(Dietary::NonVeg));
        assert!("vegan".parse::<Dietary>().is_err());
    }
}
