use axum::{Router, routing::{get, post}, middleware};
use crate::state::AppState;
use crate::handlers::restaurant::{
    list_restaurants, get_restaurant, create_restaurant, update_restaurant, delete_restaurant,
};
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    // Browsing restaurants is public; mutations require a bearer token.
    let open = Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/{id}", get(get_restaurant));

    let protected = Router::new()
        .route("/restaurants", post(create_restaurant))
        .route(
            "/restaurants/{id}",
            axum::routing::put(update_restaurant).delete(delete_restaurant),
        )
        .route_layer(middleware::from_fn(require_auth));

    open.merge(protected)
}
