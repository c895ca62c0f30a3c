// src/dtos/payment.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub order_id: i64,
    pub payment_method: Option<String>,
    /// Defaults to "Pending" when omitted.
    pub payment_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: String,
}

#[derive(Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub order_id: i64,
    pub payment_method: Option<String>,
    pub payment_status: String,
}

impl From<crate::models::payment::Payment> for PaymentResponse {
    fn from(p: crate::models::payment::Payment) -> Self {
        Self {
            id: p.id,
            order_id: p.order_id,
            payment_method: p.payment_method,
            payment_status: p.payment_status,
        }
    }
}
