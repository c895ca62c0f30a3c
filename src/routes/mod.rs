pub mod customers;
pub mod restaurants;
pub mod menus;
pub mod orders;
pub mod payments;
pub mod shippings;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(customers::routes())
        .merge(restaurants::routes())
        .merge(menus::routes())
        .merge(orders::routes())
        .merge(payments::routes())
        .merge(shippings::routes())
}
