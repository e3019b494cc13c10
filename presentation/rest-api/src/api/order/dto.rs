use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderHistory, OrderLine};

#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    pub outlet: String,
    pub placed_at: DateTime<Utc>,
    pub status: String,
    pub total: u64,
    pub pickup_slot: String,
    /// Whether live tracking is offered
    pub trackable: bool,
    pub items: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            trackable: order.is_trackable(),
            id: order.id,
            outlet: order.outlet_name,
            placed_at: order.placed_at,
            status: order.status.to_string(),
            total: order.total,
            pickup_slot: order.pickup_slot,
            items: order.lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderHistoryResponse {
    pub active: Vec<OrderResponse>,
    pub past: Vec<OrderResponse>,
    pub cancelled: Vec<OrderResponse>,
}

impl From<OrderHistory> for OrderHistoryResponse {
    fn from(history: OrderHistory) -> Self {
        Self {
            active: history.active.into_iter().map(Into::into).collect(),
            past: history.past.into_iter().map(Into::into).collect(),
            cancelled: history.cancelled.into_iter().map(Into::into).collect(),
        }
    }
}
