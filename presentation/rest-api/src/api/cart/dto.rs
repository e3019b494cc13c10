use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::checkout::{DELIVERY_FEE, OrderConfirmation};
use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog item id, e.g. "kj-1"
    pub item_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// "card" (default), "upi" or "cash"
    #[oai(skip_serializing_if_is_none)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub item_id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id().to_string(),
            name: line.item().name.clone(),
            unit_price: line.item().price,
            quantity: line.quantity(),
            line_total: line.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: String,
    #[oai(skip_serializing_if_is_none)]
    pub owner: Option<String>,
    pub lines: Vec<CartLineResponse>,
    pub total_items: u64,
    pub subtotal: u64,
    /// Charged on checkout; zero while the cart is empty
    pub delivery_fee: u64,
    pub total: u64,
    /// "empty" or "non_empty"
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let subtotal = cart.subtotal();
        let delivery_fee = if cart.is_empty() { 0 } else { DELIVERY_FEE };
        Self {
            id: cart.id.to_string(),
            owner: cart.owner.as_ref().map(|o| o.to_string()),
            lines: cart.lines().iter().map(Into::into).collect(),
            total_items: cart.total_item_count(),
            subtotal,
            delivery_fee,
            total: subtotal.saturating_add(delivery_fee),
            state: cart.state().to_string(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderConfirmationResponse {
    pub lines: Vec<CartLineResponse>,
    pub item_count: u64,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,
    pub payment_method: String,
    pub placed_at: DateTime<Utc>,
    pub ready_in_minutes_min: u32,
    pub ready_in_minutes_max: u32,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        let (min, max) = confirmation.ready_in_minutes;
        Self {
            lines: confirmation.lines.iter().map(Into::into).collect(),
            item_count: confirmation.item_count,
            subtotal: confirmation.subtotal,
            delivery_fee: confirmation.delivery_fee,
            total: confirmation.total,
            payment_method: confirmation.payment_method.to_string(),
            placed_at: confirmation.placed_at,
            ready_in_minutes_min: min,
            ready_in_minutes_max: max,
        }
    }
}
