use axum::{Router, routing::{get, post}, middleware};
use crate::state::AppState;
use crate::handlers::menu::{list_menus, get_menu, create_menu, update_menu, delete_menu};
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    let open = Router::new()
        .route("/menus", get(list_menus))
        .route("/menus/{id}", get(get_menu));

    let protected = Router::new()
        .route("/menus", post(create_menu))
        .route(
            "/menus/{id}",
            axum::routing::put(update_menu).delete(delete_menu),
        )
        .route_layer(middleware::from_fn(require_auth));

    open.merge(protected)
}
