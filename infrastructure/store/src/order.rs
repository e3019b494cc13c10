use async_trait::async_trait;
use chrono::{Duration, Utc};

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderLine, OrderStatus};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

/// Demo order history served to every signed-in user until orders are
/// persisted.
#[derive(Default)]
pub struct SampleOrderRepository;

impl SampleOrderRepository {
    pub fn new() -> Self {
        Self
    }
}

fn line(name: &str, unit_price: u64) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity: 1,
        unit_price,
    }
}

#[async_trait]
impl OrderRepository for SampleOrderRepository {
    async fn get_all(&self, _user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let now = Utc::now();
        Ok(vec![
            Order {
                id: "ORD7890".to_string(),
                outlet_name: "Kathi Junction".to_string(),
                placed_at: now - Duration::minutes(30),
                status: OrderStatus::Preparing,
                total: 260,
                pickup_slot: "1:00 PM - 1:15 PM".to_string(),
                lines: vec![
                    line("Paneer Kathi Roll", 120),
                    line("French Fries", 80),
                    line("Masala Cola", 60),
                ],
            },
            Order {
                id: "ORD6543".to_string(),
                outlet_name: "Dosa Point".to_string(),
                placed_at: now - Duration::days(1),
                status: OrderStatus::Completed,
                total: 190,
                pickup_slot: "12:15 PM - 12:30 PM".to_string(),
                lines: vec![line("Masala Dosa", 110), line("Idli Sambar", 80)],
            },
            Order {
                id: "ORD5432".to_string(),
                outlet_name: "Kathi Junction".to_string(),
                placed_at: now - Duration::days(2),
                status: OrderStatus::Completed,
                total: 150,
                pickup_slot: "2:45 PM - 3:00 PM".to_string(),
                lines: vec![line("Chicken Kathi Roll", 150)],
            },
        ])
    }
}
