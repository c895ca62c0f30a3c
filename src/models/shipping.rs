use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Shipping {
    pub id: i64,
    pub order_id: i64,
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub recipient_phone: Option<String>,
    pub shipping_status: String,
}
