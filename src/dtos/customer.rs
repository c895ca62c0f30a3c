// src/dtos/customer.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    pub username: String,
    pub password: String,
    pub fullname: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub fullname: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub username: String,
    pub fullname: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl From<crate::models::customer::Customer> for CustomerResponse {
    fn from(c: crate::models::customer::Customer) -> Self {
        Self {
            id: c.id,
            username: c.username,
            fullname: c.fullname,
            address: c.address,
            phone: c.phone,
            email: c.email,
            status: c.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub fullname: Option<String>,
}
