use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::model::AuthState;
use crate::domain::menu::model::{MenuItem, MenuItemId};
use crate::domain::shared::value_objects::UserId;

use super::checkout::{CheckoutOutcome, OrderConfirmation};
use super::value_objects::{CartState, PaymentMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(Uuid);

impl CartId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CartId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item snapshot plus the selected quantity. Quantity is never 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: MenuItem,
    quantity: u32,
}

impl CartLine {
    fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn item_id(&self) -> &MenuItemId {
        &self.item.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

/// In-memory shopping cart for one session.
///
/// Lines are unique per item id and keep insertion order.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub owner: Option<UserId>,
    lines: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(owner: Option<UserId>) -> Self {
        let now = Utc::now();
        Self {
            id: CartId::new(),
            owner,
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Adds one unit of `item` and returns its new quantity.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        self.touch();
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                1
            }
        }
    }

    /// Removes one unit and returns what is left. Unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> u32 {
        let Some(index) = self.lines.iter().position(|l| &l.item.id == item_id) else {
            return 0;
        };

        self.touch();
        let remaining = self.lines[index].quantity - 1;
        if remaining == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = remaining;
        }
        remaining
    }

    pub fn quantity_of(&self, item_id: &MenuItemId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.item.id == item_id)
            .map_or(0, CartLine::quantity)
    }

    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
    }

    pub fn reset(&mut self) {
        self.touch();
        self.lines.clear();
    }

    /// Gates on authentication and ownership, then prices and clears the cart.
    /// An anonymous cart is claimed by the caller.
    pub fn checkout(&mut self, payment_method: PaymentMethod, auth: &AuthState) -> CheckoutOutcome {
        let Some(identity) = auth.identity() else {
            return CheckoutOutcome::LoginRequired;
        };
        if self.owner.as_ref().is_some_and(|owner| owner != &identity.user_id) {
            return CheckoutOutcome::Forbidden;
        }
        if self.lines.is_empty() {
            return CheckoutOutcome::Empty;
        }

        let confirmation = OrderConfirmation::new(std::mem::take(&mut self.lines), payment_method);
        if self.owner.is_none() {
            self.owner = Some(identity.user_id.clone());
        }
        self.touch();
        CheckoutOutcome::Confirmed(confirmation)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
