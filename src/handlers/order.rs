// src/handlers/order.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::dtos::order::{
    CreateOrderRequest, CreateOrderResponse, OrderItemResponse, OrderListItem, OrderResponse,
    UpdateOrderStatusRequest,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::order::{Order, OrderItem};
use crate::state::AppState;
use tracing::instrument;

// POST /orders
//
// The one multi-statement write in the system. The order header and all of
// its items land in a single transaction: any failed insert aborts the whole
// attempt and no partial order is ever visible to readers. The generated id
// is only handed out after commit.
#[instrument(skip(state, req), fields(customer_id = auth.customer_id))]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    // Omitted customer_id falls back to the authenticated caller.
    let customer_id = req.customer_id.unwrap_or(auth.customer_id);

    // Holds one pooled connection for the transaction's lifetime. An early
    // return via `?` drops the uncommitted transaction, which rolls it back
    // and returns the connection to the pool unconditionally.
    let mut tx = state.db_pool.begin().await?;

    let order_id: i64 = sqlx::query_scalar(
        "INSERT INTO tbl_orders (customer_id, restaurant_id, total_amount, order_status, created_at)
         VALUES ($1, $2, $3, 'Pending', NOW())
         RETURNING id",
    )
    .bind(customer_id)
    .bind(req.restaurant_id)
    .bind(req.total_amount)
    .fetch_one(&mut *tx)
    .await?;

    // Items go in sequentially, in input order, all inside the transaction.
    for item in &req.items {
        sqlx::query(
            "INSERT INTO tbl_order_items (order_id, menu_id, quantity, price)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(order_id)
        .bind(item.menu_id)
        .bind(item.quantity)
        .bind(item.price)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(order_id, items = req.items.len(), "Order created");

    Ok((StatusCode::CREATED, Json(CreateOrderResponse { id: order_id })))
}

// GET /orders - dashboard list with customer/restaurant names, newest first
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderListItem>>, AppError> {
    let rows = sqlx::query_as::<_, OrderListRow>(
        "SELECT o.id, o.total_amount::FLOAT8 AS total_amount, o.order_status, o.created_at,
                r.name AS restaurant_name, c.username AS customer_name
         FROM tbl_orders o
         LEFT JOIN tbl_restaurants r ON o.restaurant_id = r.id
         LEFT JOIN tbl_customers c ON o.customer_id = c.id
         ORDER BY o.created_at DESC",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| OrderListItem {
                id: row.id,
                total_amount: row.total_amount,
                order_status: row.order_status,
                created_at: row.created_at,
                restaurant_name: row.restaurant_name,
                customer_name: row.customer_name,
            })
            .collect(),
    ))
}

// GET /orders/:id - header plus line items
pub async fn get_order(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, customer_id, restaurant_id, total_amount::FLOAT8 AS total_amount,
                order_status, created_at
         FROM tbl_orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, menu_id, quantity, price::FLOAT8 AS price
         FROM tbl_order_items WHERE order_id = $1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(OrderResponse {
        id: order.id,
        customer_id: order.customer_id,
        restaurant_id: order.restaurant_id,
        total_amount: order.total_amount,
        order_status: order.order_status,
        created_at: order.created_at,
        items: items.into_iter().map(OrderItemResponse::from).collect(),
    }))
}

// PUT /orders/:id - status transition ("Pending", "Confirmed", ...); the
// status is a free-form string, matching the stored data.
pub async fn update_order_status(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    if payload.order_status.trim().is_empty() {
        return Err(AppError::validation("order_status is required"));
    }

    let order = sqlx::query_as::<_, Order>(
        "UPDATE tbl_orders SET order_status = $1 WHERE id = $2
         RETURNING id, customer_id, restaurant_id, total_amount::FLOAT8 AS total_amount,
                   order_status, created_at",
    )
    .bind(payload.order_status.trim())
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, menu_id, quantity, price::FLOAT8 AS price
         FROM tbl_order_items WHERE order_id = $1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(OrderResponse {
        id: order.id,
        customer_id: order.customer_id,
        restaurant_id: order.restaurant_id,
        total_amount: order.total_amount,
        order_status: order.order_status,
        created_at: order.created_at,
        items: items.into_iter().map(OrderItemResponse::from).collect(),
    }))
}

// DELETE /orders/:id - items go with the header via ON DELETE CASCADE
pub async fn delete_order(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM tbl_orders WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Order not found"));
    }

    Ok(Json(()))
}

#[derive(sqlx::FromRow)]
struct OrderListRow {
    id: i64,
    total_amount: f64,
    order_status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    restaurant_name: Option<String>,
    customer_name: Option<String>,
}

// End-to-end checks for the transactional write path. They need a running
// Postgres with schema.sql applied, so they are ignored by default:
//
//   DATABASE_URL=postgres://... cargo test -- --ignored
#[cfg(test)]
mod tests {
    use crate::routes;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use tower::ServiceExt;

    const SECRET: &str = "integration-test-secret";

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for DB tests");
        crate::database::create_pool(&url).await.unwrap()
    }

    fn app(pool: PgPool) -> Router {
        std::env::set_var("JWT_SECRET", SECRET);
        Router::new()
            .nest("/api", routes::create_router())
            .with_state(AppState::new(pool))
    }

    fn bearer() -> String {
        format!("Bearer {}", crate::auth::jwt::sign_token(1, "tester", SECRET).unwrap())
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("Authorization", bearer())
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("Authorization", bearer())
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn insert_restaurant(pool: &PgPool, name: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO tbl_restaurants (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn create_order_persists_header_and_items() {
        let pool = test_pool().await;
        let restaurant_id = insert_restaurant(&pool, "Atomic Diner").await;

        let res = app(pool.clone())
            .oneshot(post(
                "/api/orders",
                json!({
                    "restaurant_id": restaurant_id,
                    "total_amount": 450.0,
                    "items": [
                        {"menu_id": 11, "quantity": 2, "price": 150.0},
                        {"menu_id": 12, "quantity": 1, "price": 150.0}
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let order_id = body_json(res).await["id"].as_i64().unwrap();

        let res = app(pool.clone())
            .oneshot(get(&format!("/api/orders/{order_id}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let order = body_json(res).await;

        assert_eq!(order["order_status"], "Pending");
        let items = order["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["menu_id"], 11);
        assert_eq!(items[0]["quantity"], 2);
        assert_eq!(items[0]["price"], 150.0);
        assert_eq!(items[1]["menu_id"], 12);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn failed_item_insert_rolls_back_header() {
        let pool = test_pool().await;
        let restaurant_id = insert_restaurant(&pool, "Rollback Cafe").await;

        // quantity -1 violates the schema check on the second statement
        let res = app(pool.clone())
            .oneshot(post(
                "/api/orders",
                json!({
                    "restaurant_id": restaurant_id,
                    "total_amount": 150.0,
                    "items": [{"menu_id": 11, "quantity": -1, "price": 150.0}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // No header from the aborted attempt may be visible
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tbl_orders WHERE restaurant_id = $1")
                .bind(restaurant_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn empty_item_list_creates_bare_order() {
        let pool = test_pool().await;
        let restaurant_id = insert_restaurant(&pool, "Empty Plate").await;

        let res = app(pool.clone())
            .oneshot(post(
                "/api/orders",
                json!({
                    "restaurant_id": restaurant_id,
                    "total_amount": 0.0,
                    "items": []
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let order_id = body_json(res).await["id"].as_i64().unwrap();

        let res = app(pool).oneshot(get(&format!("/api/orders/{order_id}"))).await.unwrap();
        let order = body_json(res).await;
        assert!(order["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn duplicate_username_registration_conflicts() {
        let pool = test_pool().await;
        let username = format!("dup_{}", chrono::Utc::now().timestamp_nanos_opt().unwrap());
        let payload = json!({
            "username": username,
            "password": "password123",
            "fullname": "First In"
        });

        let res = app(pool.clone())
            .oneshot(post("/api/customers/register", payload.clone()))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app(pool.clone())
            .oneshot(post("/api/customers/register", payload))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        // The first registration still logs in
        let res = app(pool)
            .oneshot(post(
                "/api/customers/login",
                json!({"username": username, "password": "password123"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert!(body["token"].as_str().is_some());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn restaurant_menu_order_scenario() {
        let pool = test_pool().await;

        let res = app(pool.clone())
            .oneshot(post("/api/restaurants", json!({"name": "Test"})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let restaurant_id = body_json(res).await["id"].as_i64().unwrap();

        let res = app(pool.clone())
            .oneshot(post(
                "/api/menus",
                json!({"restaurant_id": restaurant_id, "name": "Pad Thai", "price": 150.0}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let menu_id = body_json(res).await["id"].as_i64().unwrap();

        let res = app(pool.clone())
            .oneshot(post(
                "/api/orders",
                json!({
                    "restaurant_id": restaurant_id,
                    "total_amount": 300.0,
                    "items": [{"menu_id": menu_id, "quantity": 2, "price": 150.0}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let order_id = body_json(res).await["id"].as_i64().unwrap();

        let items: Vec<(i64, i32)> = sqlx::query_as(
            "SELECT menu_id, quantity FROM tbl_order_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(items, vec![(menu_id, 2)]);
    }
}
