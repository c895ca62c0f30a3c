// src/dtos/restaurant.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
}

#[derive(Serialize)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
}

impl From<crate::models::restaurant::Restaurant> for RestaurantResponse {
    fn from(r: crate::models::restaurant::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
            phone: r.phone,
            details: r.details,
        }
    }
}
