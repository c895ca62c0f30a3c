// src/dtos/menu.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuRequest {
    pub restaurant_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// `GET /menus?restaurant_id=` filter.
#[derive(Debug, Deserialize)]
pub struct MenuListQuery {
    pub restaurant_id: Option<i64>,
}

#[derive(Serialize)]
pub struct MenuResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl From<crate::models::menu::Menu> for MenuResponse {
    fn from(m: crate::models::menu::Menu) -> Self {
        Self {
            id: m.id,
            restaurant_id: m.restaurant_id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
        }
    }
}
