//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router with the document and health handlers
//! - Wire up middleware in a fixed order (build info, request ID,
//!   access log, timeout, body limit)
//! - Serve a pre-bound listener until shutdown is triggered
//! - Drain in-flight requests before returning

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::document::DocumentStore;
use crate::health::HealthFlag;
use crate::http::handlers;
use crate::http::middleware::access_log::access_log;
use crate::http::request::RequestIdLayer;
use crate::http::response::build_info_layer;
use crate::security::AuthConfig;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub document: DocumentStore,
    pub auth: AuthConfig,
    pub health: HealthFlag,
}

/// HTTP server for the wiki document.
pub struct HttpServer {
    router: Router,
    health: HealthFlag,
}

impl HttpServer {
    /// Create a new server from a validated configuration.
    pub fn new(config: ServerConfig) -> Self {
        let health = HealthFlag::new();
        let state = AppState {
            document: DocumentStore::new(config.document.path.clone()),
            auth: config.auth.clone(),
            health: health.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, health }
    }

    /// Handle on the readiness flag this server reports through.
    pub fn health(&self) -> HealthFlag {
        self.health.clone()
    }

    /// Build the router. Layer order is load-bearing: build info runs
    /// outermost so every response is stamped, the request ID must exist
    /// before the access log reads it, and the router sits innermost.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/healthz", any(handlers::healthz))
            .route("/", any(handlers::document))
            .route("/{*path}", any(handlers::document))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(build_info_layer())
                    .layer(RequestIdLayer)
                    .layer(axum::middleware::from_fn(access_log))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.write_secs,
                    )))
                    .layer(DefaultBodyLimit::max(config.upload.max_body_bytes)),
            )
    }

    /// Serve a pre-bound listener until `shutdown` fires, then drain.
    ///
    /// Raises the health flag before accepting and lowers it the moment
    /// the shutdown notification arrives, ahead of the drain, so health
    /// probes fail fast while in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let health = self.health.clone();

        health.set_serving(true);
        tracing::info!(address = %addr, "ready to handle requests");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                health.set_serving(false);
                tracing::info!("draining in-flight requests");
            })
            .await?;

        tracing::info!("listener closed");
        Ok(())
    }
}
