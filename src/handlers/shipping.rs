// src/handlers/shipping.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dtos::shipping::{CreateShippingRequest, ShippingResponse, UpdateShippingStatusRequest};
use crate::error::AppError;
use crate::models::shipping::Shipping;
use crate::state::AppState;

// GET /shippings
pub async fn list_shippings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShippingResponse>>, AppError> {
    let shippings = sqlx::query_as::<_, Shipping>(
        "SELECT id, order_id, recipient_name, recipient_address, recipient_phone, shipping_status
         FROM tbl_shippings ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(shippings.into_iter().map(ShippingResponse::from).collect()))
}

// GET /shippings/:id
pub async fn get_shipping(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ShippingResponse>, AppError> {
    let shipping = sqlx::query_as::<_, Shipping>(
        "SELECT id, order_id, recipient_name, recipient_address, recipient_phone, shipping_status
         FROM tbl_shippings WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Shipping not found"))?;

    Ok(Json(ShippingResponse::from(shipping)))
}

// POST /shippings
pub async fn create_shipping(
    State(state): State<AppState>,
    Json(payload): Json<CreateShippingRequest>,
) -> Result<(StatusCode, Json<ShippingResponse>), AppError> {
    let status = payload.shipping_status.as_deref().unwrap_or("Preparing");

    let shipping = sqlx::query_as::<_, Shipping>(
        "INSERT INTO tbl_shippings (order_id, recipient_name, recipient_address, recipient_phone, shipping_status)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, order_id, recipient_name, recipient_address, recipient_phone, shipping_status",
    )
    .bind(payload.order_id)
    .bind(&payload.recipient_name)
    .bind(&payload.recipient_address)
    .bind(&payload.recipient_phone)
    .bind(status)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(ShippingResponse::from(shipping))))
}

// PUT /shippings/:id
pub async fn update_shipping_status(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateShippingStatusRequest>,
) -> Result<Json<ShippingResponse>, AppError> {
    if payload.shipping_status.trim().is_empty() {
        return Err(AppError::validation("shipping_status is required"));
    }

    let shipping = sqlx::query_as::<_, Shipping>(
        "UPDATE tbl_shippings SET shipping_status = $1 WHERE id = $2
         RETURNING id, order_id, recipient_name, recipient_address, recipient_phone, shipping_status",
    )
    .bind(payload.shipping_status.trim())
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Shipping not found"))?;

    Ok(Json(ShippingResponse::from(shipping)))
}
