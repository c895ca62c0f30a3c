use axum::{
    routing::get,
    Router,
};
use crate::state::AppState;
use crate::handlers::order;
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(order::list_orders).post(order::create_order))
        .route(
            "/orders/{id}",
            get(order::get_order)
                .put(order::update_order_status)
                .delete(order::delete_order),
        )
        .route_layer(axum::middleware::from_fn(require_auth))
}
