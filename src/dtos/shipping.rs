// src/dtos/shipping.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateShippingRequest {
    pub order_id: i64,
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub recipient_phone: Option<String>,
    /// Defaults to "Preparing" when omitted.
    pub shipping_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateShippingStatusRequest {
    pub shipping_status: String,
}

#[derive(Serialize)]
pub struct ShippingResponse {
    pub id: i64,
    pub order_id: i64,
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub recipient_phone: Option<String>,
    pub shipping_status: String,
}

impl From<crate::models::shipping::Shipping> for ShippingResponse {
    fn from(s: crate::models::shipping::Shipping) -> Self {
        Self {
            id: s.id,
            order_id: s.order_id,
            recipient_name: s.recipient_name,
            recipient_address: s.recipient_address,
            recipient_phone: s.recipient_phone,
            shipping_status: s.shipping_status,
        }
    }
}
