use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "placed"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl OrderStatus {
    /// Orders still moving through the kitchen.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl OrderLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub outlet_name: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: u64,
    pub pickup_slot: String,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn is_trackable(&self) -> bool {
        self.status.is_active()
    }
}

/// Orders split the way the history page shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    pub active: Vec<Order>,
    pub past: Vec<Order>,
    pub cancelled: Vec<Order>,
}

impl OrderHistory {
    pub fn group(orders: Vec<Order>) -> Self {
        let mut history = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Completed => history.past.push(order),
                OrderStatus::Cancelled => history.cancelled.push(order),
                _ => history.active.push(order),
            }
        }
        history
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.past.len() + self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            outlet_name: "Kathi Junction".to_string(),
            placed_at: Utc::now(),
            status,
            total: 150,
            pickup_slot: "2:45 PM - 3:00 PM".to_string(),
            lines: vec![OrderLine {
                name: "Chicken Kathi Roll".to_string(),
                quantity: 1,
                unit_price: 150,
            }],
        }
    }

    #[test]
    fn should_group_orders_by_status() {
        let history = OrderHistory::group(vec![
            order("ORD1", OrderStatus::Preparing),
            order("ORD2", OrderStatus::Completed),
            order("ORD3", OrderStatus::Cancelled),
            order("ORD4", OrderStatus::Ready),
            order("ORD5", OrderStatus::Placed),
        ]);

        assert_eq!(history.active.len(), 3);
        assert_eq!(history.past.len(), 1);
        assert_eq!(history.cancelled.len(), 1);
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn should_only_track_active_orders() {
        assert!(order("ORD1", OrderStatus::Ready).is_trackable());
        assert!(!order("ORD2", OrderStatus::Completed).is_trackable());
        assert!(!order("ORD3", OrderStatus::Cancelled).is_trackable());
    }

    #[test]
    fn should_multiply_line_total() {
        let line = OrderLine {
            name: "Masala Cola".to_string(),
            quantity: 3,
            unit_price: 40,
        };

        assert_eq!(line.line_total(), 120);
    }
}
