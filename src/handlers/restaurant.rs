// src/handlers/restaurant.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dtos::restaurant::{CreateRestaurantRequest, RestaurantResponse, UpdateRestaurantRequest};
use crate::error::AppError;
use crate::models::restaurant::Restaurant;
use crate::state::AppState;

// GET /restaurants - public browse
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, phone, menu_details AS details
         FROM tbl_restaurants ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(restaurants.into_iter().map(RestaurantResponse::from).collect()))
}

// GET /restaurants/:id
pub async fn get_restaurant(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, phone, menu_details AS details
         FROM tbl_restaurants WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Restaurant not found"))?;

    Ok(Json(RestaurantResponse::from(restaurant)))
}

// POST /restaurants
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Restaurant name is required"));
    }

    let restaurant = sqlx::query_as::<_, Restaurant>(
        "INSERT INTO tbl_restaurants (name, address, phone, menu_details)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, address, phone, menu_details AS details",
    )
    .bind(payload.name.trim())
    .bind(&payload.address)
    .bind(&payload.phone)
    .bind(&payload.details)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(RestaurantResponse::from(restaurant))))
}

// PUT /restaurants/:id
pub async fn update_restaurant(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "UPDATE tbl_restaurants SET
            name         = COALESCE($1, name),
            address      = COALESCE($2, address),
            phone        = COALESCE($3, phone),
            menu_details = COALESCE($4, menu_details)
         WHERE id = $5
         RETURNING id, name, address, phone, menu_details AS details",
    )
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.details)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Restaurant not found"))?;

    Ok(Json(RestaurantResponse::from(restaurant)))
}

// DELETE /restaurants/:id
pub async fn delete_restaurant(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM tbl_restaurants WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Restaurant not found"));
    }

    Ok(Json(()))
}
