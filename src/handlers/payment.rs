// src/handlers/payment.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dtos::payment::{CreatePaymentRequest, PaymentResponse, UpdatePaymentStatusRequest};
use crate::error::AppError;
use crate::models::payment::Payment;
use crate::state::AppState;

// GET /payments
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT id, order_id, payment_method, payment_status FROM tbl_payments ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(payments.into_iter().map(PaymentResponse::from).collect()))
}

// GET /payments/:id
pub async fn get_payment(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = sqlx::query_as::<_, Payment>(
        "SELECT id, order_id, payment_method, payment_status FROM tbl_payments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Payment not found"))?;

    Ok(Json(PaymentResponse::from(payment)))
}

// POST /payments
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    let status = payload.payment_status.as_deref().unwrap_or("Pending");

    let payment = sqlx::query_as::<_, Payment>(
        "INSERT INTO tbl_payments (order_id, payment_method, payment_status)
         VALUES ($1, $2, $3)
         RETURNING id, order_id, payment_method, payment_status",
    )
    .bind(payload.order_id)
    .bind(&payload.payment_method)
    .bind(status)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

// PUT /payments/:id
pub async fn update_payment_status(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    if payload.payment_status.trim().is_empty() {
        return Err(AppError::validation("payment_status is required"));
    }

    let payment = sqlx::query_as::<_, Payment>(
        "UPDATE tbl_payments SET payment_status = $1 WHERE id = $2
         RETURNING id, order_id, payment_method, payment_status",
    )
    .bind(payload.payment_status.trim())
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Payment not found"))?;

    Ok(Json(PaymentResponse::from(payment)))
}
