use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::shared::analytics::CleanedDataset;
use crate::shared::config::ServerConfig;
use crate::system::middleware::request_logger::request_logger;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<CleanedDataset>,
    /// Row limit for ranked charts when the request gives none
    pub default_top_n: usize,
}

/// Configure all application routes
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS (d500-d503)
        // ========================================
        .route("/api/dashboards", get(handlers::dashboards::get_catalog))
        .route("/api/dashboards/:view", get(handlers::dashboards::get_view))
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Bind the listener; `host` may be an IP address or a resolvable hostname
pub async fn bind_listener(server: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_accepts_hostname() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
        };
        let listener = bind_listener(&server).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_accepts_ip() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let listener = bind_listener(&server).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
