//! # HTTP Server
//!
//! Assembles the record routes with CORS and request tracing and serves
//! them on the configured address.

use std::io;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::ServerConfig;
use super::record_routes::{record_routes, root_routes, RecordsState};
use crate::record::Validator;
use crate::store::{JsonFileStore, RecordStore};

/// HTTP server for the record API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a server whose records live in `config.data_file`
    pub fn with_config(config: ServerConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
        Self::with_store(config, store)
    }

    /// Create a server backed by an arbitrary record store
    pub fn with_store(config: ServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: Arc<dyn RecordStore>) -> Router {
        let validator = if config.strict_categories {
            Validator::strict()
        } else {
            Validator::new()
        };
        let records_state = Arc::new(RecordsState::new(store, validator));

        Router::new()
            .merge(root_routes())
            .nest("/api", record_routes(records_state))
            .layer(DefaultBodyLimit::disable())
            .layer(cors_layer(&config.cors_origins))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured host and port. Hostnames are resolved.
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        info!(
            %addr,
            data_file = %self.config.data_file.display(),
            strict_categories = self.config.strict_categories,
            "collection API listening"
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Permissive CORS unless specific origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
