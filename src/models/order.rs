use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, FromRow)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub total_amount: f64,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
}

/// Line item belonging to an order. Rows only ever come into existence
/// inside the order-creation transaction; `price` is a snapshot taken at
/// order time and never follows later menu price changes.
#[derive(Debug, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i32,
    pub price: f64,
}
