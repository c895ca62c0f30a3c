use axum::{Router, routing::{post, get}, middleware};
use crate::state::AppState;
use crate::handlers::customer::{
    register_customer, login_customer, list_customers, get_customer, update_customer,
    delete_customer,
};
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    let open = Router::new()
        .route("/customers/register", post(register_customer))
        .route("/customers/login", post(login_customer));

    let protected = Router::new()
        .route("/customers", get(list_customers))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route_layer(middleware::from_fn(require_auth));

    open.merge(protected)
}
