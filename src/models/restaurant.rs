use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
}
