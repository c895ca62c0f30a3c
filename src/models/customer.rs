use sqlx::FromRow;

/// Customer row without the password column. Handlers that need the stored
/// hash (login) keep their own private row type.
#[derive(Debug, FromRow)]
pub struct Customer {
    pub id: i64,
    pub username: String,
    pub fullname: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}
