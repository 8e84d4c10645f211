//! labstore API server
//!
//! Laboratory-products storefront and back-office API built with Axum:
//! catalog browsing, per-user carts, checkout with invoicing, and admin
//! order/user management.

mod config;
mod logging;
mod middleware;
mod routes;

use axum::Router;
use config::Config;
use labstore_api_cart::{cart_router, CartState};
use labstore_api_catalog::{catalog_router, CatalogState};
use labstore_api_orders::{admin_orders_router, orders_router, OrdersState};
use labstore_api_users::{users_router, UsersState};
use labstore_db::DbPool;
use middleware::{optional_jwt_auth_middleware, JwtPublicKey};
use routes::{health_routes, HealthState};
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting labstore API"
    );

    // Create database connection pool
    let pool = match DbPool::connect(&config.database_url).await {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = labstore_db::run_migrations(&pool).await {
        eprintln!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let app = build_app(&config, &pool);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "labstore API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Assemble the full application router.
fn build_app(config: &Config, pool: &DbPool) -> Router {
    let pg = pool.inner().clone();

    let health_state = Arc::new(HealthState {
        pool: pg.clone(),
        start_time: Instant::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let orders_state = OrdersState::new(pg.clone());

    // Storefront APIs allow anonymous catalog reads; everything else is
    // enforced by per-router guards once the bearer middleware has run.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes(health_state))
        .merge(catalog_router(CatalogState::new(pg.clone())))
        .merge(cart_router(CartState::new(pg.clone())))
        .merge(orders_router(orders_state.clone()))
        .merge(admin_orders_router(orders_state))
        .merge(users_router(UsersState::new(pg)))
        .layer(axum::middleware::from_fn(optional_jwt_auth_middleware))
        .layer(axum::Extension(JwtPublicKey(Arc::new(
            config.jwt_public_key.clone(),
        ))))
        .layer(cors)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
