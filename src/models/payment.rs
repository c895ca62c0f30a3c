use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub payment_method: Option<String>,
    pub payment_status: String,
}
