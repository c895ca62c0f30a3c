// src/handlers/menu.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::dtos::menu::{CreateMenuRequest, MenuListQuery, MenuResponse, UpdateMenuRequest};
use crate::error::AppError;
use crate::models::menu::Menu;
use crate::state::AppState;

// GET /menus?restaurant_id= - public browse, optionally scoped to one restaurant
pub async fn list_menus(
    Query(params): Query<MenuListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuResponse>>, AppError> {
    let menus = match params.restaurant_id {
        Some(restaurant_id) => {
            sqlx::query_as::<_, Menu>(
                "SELECT id, restaurant_id, menu_name AS name, description,
                        price::FLOAT8 AS price, category
                 FROM tbl_menus WHERE restaurant_id = $1 ORDER BY id",
            )
            .bind(restaurant_id)
            .fetch_all(&state.db_pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Menu>(
                "SELECT id, restaurant_id, menu_name AS name, description,
                        price::FLOAT8 AS price, category
                 FROM tbl_menus ORDER BY id",
            )
            .fetch_all(&state.db_pool)
            .await?
        }
    };

    Ok(Json(menus.into_iter().map(MenuResponse::from).collect()))
}

// GET /menus/:id
pub async fn get_menu(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MenuResponse>, AppError> {
    let menu = sqlx::query_as::<_, Menu>(
        "SELECT id, restaurant_id, menu_name AS name, description,
                price::FLOAT8 AS price, category
         FROM tbl_menus WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Menu not found"))?;

    Ok(Json(MenuResponse::from(menu)))
}

// POST /menus
pub async fn create_menu(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuRequest>,
) -> Result<(StatusCode, Json<MenuResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Menu name is required"));
    }
    if payload.price < 0.0 {
        return Err(AppError::validation("Price cannot be negative"));
    }

    let menu = sqlx::query_as::<_, Menu>(
        "INSERT INTO tbl_menus (restaurant_id, menu_name, description, price, category)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, restaurant_id, menu_name AS name, description,
                   price::FLOAT8 AS price, category",
    )
    .bind(payload.restaurant_id)
    .bind(payload.name.trim())
    .bind(&payload.description)
    .bind(payload.price)
    .bind(&payload.category)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(MenuResponse::from(menu))))
}

// PUT /menus/:id
pub async fn update_menu(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateMenuRequest>,
) -> Result<Json<MenuResponse>, AppError> {
    if let Some(price) = payload.price {
        if price < 0.0 {
            return Err(AppError::validation("Price cannot be negative"));
        }
    }

    let menu = sqlx::query_as::<_, Menu>(
        "UPDATE tbl_menus SET
            restaurant_id = COALESCE($1, restaurant_id),
            menu_name     = COALESCE($2, menu_name),
            description   = COALESCE($3, description),
            price         = COALESCE($4, price),
            category      = COALESCE($5, category)
         WHERE id = $6
         RETURNING id, restaurant_id, menu_name AS name, description,
                   price::FLOAT8 AS price, category",
    )
    .bind(payload.restaurant_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.category)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Menu not found"))?;

    Ok(Json(MenuResponse::from(menu)))
}

// DELETE /menus/:id
//
// Existing order items keep their price snapshot; deleting a menu never
// touches historical orders.
pub async fn delete_menu(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM tbl_menus WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Menu not found"));
    }

    Ok(Json(()))
}
