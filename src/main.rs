// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod middleware;
mod state;
mod dtos;
mod error;
mod auth;

use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_pool = database::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    let app = Router::new()
        .route("/", get(|| async { "FoodDash API" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", routes::create_router())
        .layer(CorsLayer::permissive())
        .with_state(state::AppState::new(db_pool));

    let listener = match bind_listener().await {
        Some(l) => l,
        None => {
            tracing::error!("No free port available, giving up");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

/// Binds HOST:PORT from the environment, walking up to 20 ports past the
/// configured one instead of crashing when the address is taken.
async fn bind_listener() -> Option<TcpListener> {
    let host: IpAddr = std::env::var("HOST")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(|| "127.0.0.1".parse().unwrap());
    let base_port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    for offset in 0u16..=20 {
        let addr = SocketAddr::from((host, base_port.saturating_add(offset)));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                tracing::info!("Server running on {}", addr);
                return Some(listener);
            }
            Err(e) => {
                tracing::warn!(%addr, error=%e, "Bind failed, trying next port");
            }
        }
    }
    None
}
