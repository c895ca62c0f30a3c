use axum::{
    routing::get,
    Router,
};
use crate::state::AppState;
use crate::handlers::shipping;
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shippings", get(shipping::list_shippings).post(shipping::create_shipping))
        .route(
            "/shippings/{id}",
            get(shipping::get_shipping).put(shipping::update_shipping_status),
        )
        .route_layer(axum::middleware::from_fn(require_auth))
}
