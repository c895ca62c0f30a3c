// src/handlers/customer.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::Error as SqlxError;

use crate::auth::jwt::sign_token;
use crate::dtos::customer::{
    CustomerResponse, LoginRequest, LoginResponse, LoginUser, RegisterCustomerRequest,
    UpdateCustomerRequest,
};
use crate::error::AppError;
use crate::models::customer::Customer;
use crate::state::AppState;
use tracing::instrument;

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

// POST /customers/register
#[instrument(skip(state, payload))]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username required"));
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation("Password too short"));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let customer = sqlx::query_as::<_, Customer>(
        "INSERT INTO tbl_customers (username, password, fullname, address, phone, email)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, username, fullname, address, phone, email, status",
    )
    .bind(payload.username.trim())
    .bind(&password_hash)
    .bind(&payload.fullname)
    .bind(&payload.address)
    .bind(&payload.phone)
    .bind(&payload.email)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "Username already exists"))?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

// POST /customers/login
//
// Unknown username and wrong password answer identically so the endpoint
// cannot be used to enumerate accounts.
#[instrument(skip(state, payload))]
pub async fn login_customer(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username required"));
    }
    if payload.password.is_empty() {
        return Err(AppError::validation("Password required"));
    }

    let customer = sqlx::query_as::<_, CustomerAuthRow>(
        "SELECT id, username, password, fullname FROM tbl_customers WHERE username = $1",
    )
    .bind(&payload.username)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let ok = verify(&payload.password, &customer.password)
        .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?;
    if !ok {
        return Err(AppError::unauthorized("Invalid username or password"));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::internal("JWT secret not configured"))?;
    let token = sign_token(customer.id, &customer.username, &secret)?;

    Ok(Json(LoginResponse {
        token,
        user: LoginUser {
            id: customer.id,
            fullname: customer.fullname,
        },
    }))
}

// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = sqlx::query_as::<_, Customer>(
        "SELECT id, username, fullname, address, phone, email, status
         FROM tbl_customers ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

// GET /customers/:id
pub async fn get_customer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT id, username, fullname, address, phone, email, status
         FROM tbl_customers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Customer not found"))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// PUT /customers/:id
#[instrument(skip(state, payload), fields(id))]
pub async fn update_customer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        "UPDATE tbl_customers SET
            fullname = COALESCE($1, fullname),
            address  = COALESCE($2, address),
            phone    = COALESCE($3, phone),
            email    = COALESCE($4, email)
         WHERE id = $5
         RETURNING id, username, fullname, address, phone, email, status",
    )
    .bind(payload.fullname)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Customer not found"))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// DELETE /customers/:id
//
// No cascade: rows elsewhere referencing this customer are the caller's
// responsibility.
pub async fn delete_customer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM tbl_customers WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Customer not found"));
    }

    Ok(Json(()))
}

#[derive(sqlx::FromRow)]
struct CustomerAuthRow {
    id: i64,
    username: String,
    password: String,
    fullname: Option<String>,
}
