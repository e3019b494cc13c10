use chrono::{DateTime, Utc};

use super::model::CartLine;
use super::value_objects::PaymentMethod;

/// Flat fee added to every confirmed order, in minor units.
pub const DELIVERY_FEE: u64 = 20;

/// Preparation window quoted to the customer, in minutes.
pub const READY_WINDOW_MINUTES: (u32, u32) = (20, 25);

/// Priced summary of a checked-out cart. Nothing is submitted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,
    pub payment_method: PaymentMethod,
    pub placed_at: DateTime<Utc>,
    pub ready_in_minutes: (u32, u32),
}

impl OrderConfirmation {
    pub fn new(lines: Vec<CartLine>, payment_method: PaymentMethod) -> Self {
        let item_count = lines.iter().map(|l| u64::from(l.quantity())).sum();
        let subtotal = lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()));

        Self {
            lines,
            item_count,
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total: subtotal.saturating_add(DELIVERY_FEE),
            payment_method,
            placed_at: Utc::now(),
            ready_in_minutes: READY_WINDOW_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The caller must authenticate first; the cart was left untouched.
    LoginRequired,
    /// The cart belongs to another user; it was left untouched.
    Forbidden,
    /// Authenticated, but there was nothing to order. An empty cart is never
    /// priced, so a lone delivery fee is not confirmed.
    Empty,
    Confirmed(OrderConfirmation),
}
