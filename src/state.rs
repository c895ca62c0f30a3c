// src/state.rs
use sqlx::PgPool;

/// Shared application state, cloned into every handler via axum `State`.
/// The pool is the only process-wide shared resource; it is owned here and
/// injected, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
