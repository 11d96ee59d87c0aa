use axum::extract::Request;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::Config;
use crate::handlers;
use crate::store::Store;
use crate::Error;

const DEFAULT_LOG_FILTER: &str = "bookstore=info,tower_http=info";

pub async fn run(config: Config) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let listener = TcpListener::bind(config.socket_addr()).await?;
    let store = if config.empty {
        Store::new()
    } else {
        Store::seeded()
    };

    serve(listener, store, config).await
}

/// Serves the API on an already bound listener until Ctrl-C is received.
pub async fn serve(listener: TcpListener, store: Store, config: Config) -> Result<(), Error> {
    info!(
        "Book API listening on http://{}{}",
        listener.local_addr()?,
        config.books_path()
    );

    axum::serve(listener, router(store, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub fn router(store: Store, config: &Config) -> Router {
    // Any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(handlers::routes(&config.books_path()))
        .layer(trace)
        .layer(cors)
        .with_state(store)
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("active"),
    })
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just keeps running.
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
