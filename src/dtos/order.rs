// src/dtos/order.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Omitted -> the authenticated caller's id is used.
    pub customer_id: Option<i64>,
    pub restaurant_id: i64,
    /// Caller-supplied; not recomputed from the items (documented trust
    /// boundary weakness, kept for compatibility).
    pub total_amount: f64,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub menu_id: i64,
    pub quantity: i32,
    /// Price snapshot at order time, independent of the menu's current price.
    pub price: f64,
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_status: String,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub total_amount: f64,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub menu_id: i64,
    pub quantity: i32,
    pub price: f64,
}

impl From<crate::models::order::OrderItem> for OrderItemResponse {
    fn from(i: crate::models::order::OrderItem) -> Self {
        Self {
            id: i.id,
            menu_id: i.menu_id,
            quantity: i.quantity,
            price: i.price,
        }
    }
}

/// Joined dashboard row: order plus customer/restaurant names. The joins are
/// LEFT joins because the ids are weak references.
#[derive(Serialize)]
pub struct OrderListItem {
    pub id: i64,
    pub total_amount: f64,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
    pub restaurant_name: Option<String>,
    pub customer_name: Option<String>,
}
