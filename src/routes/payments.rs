use axum::{
    routing::get,
    Router,
};
use crate::state::AppState;
use crate::handlers::payment;
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(payment::list_payments).post(payment::create_payment))
        .route(
            "/payments/{id}",
            get(payment::get_payment).put(payment::update_payment_status),
        )
        .route_layer(axum::middleware::from_fn(require_auth))
}
