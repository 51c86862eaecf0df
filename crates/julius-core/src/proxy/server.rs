use axum::{extract::DefaultBodyLimit, middleware, routing::post, Router};
use julius_types::{RelayConfig, RelayError};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::proxy::common::client_builder::build_http_client;
use crate::proxy::common::model_mapping::supported_models;
use crate::proxy::handlers;
use crate::proxy::middleware::{auth_middleware, cors_layer};
use crate::proxy::{JuliusClient, SecurityConfig, UpstreamEndpoints};

/// Path of the only translating route.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Axum application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<JuliusClient>,
}

impl AppState {
    pub fn new(upstream: JuliusClient) -> Self {
        Self { upstream: Arc::new(upstream) }
    }
}

/// Build the relay router.
///
/// The auth gate wraps both the completions route and the liveness fallback.
pub fn build_proxy_router(state: AppState, security: Arc<SecurityConfig>) -> Router<()> {
    Router::new()
        .route(
            CHAT_COMPLETIONS_PATH,
            post(handlers::openai::handle_chat_completions)
                .fallback(handlers::liveness::handle_method_not_allowed),
        )
        .fallback(handlers::liveness::handle_liveness)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(security, auth_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Relay server instance.
pub struct RelayServer {
    config: RelayConfig,
}

impl RelayServer {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Assemble the router from the captured configuration.
    pub fn router(&self) -> Result<Router<()>, RelayError> {
        let http_client = build_http_client()?;
        let endpoints = UpstreamEndpoints::from_base_url(&self.config.upstream.base_url);
        tracing::info!("Upstream chat endpoint: {}", endpoints.chat_url);
        tracing::info!("Model aliases: {}", supported_models().join(", "));

        let security = Arc::new(SecurityConfig::from_relay_config(&self.config));
        if security.auth_enabled() {
            tracing::info!("Bearer authorization enabled");
        } else {
            tracing::warn!("No auth token configured; all requests are allowed");
        }

        let state = AppState::new(JuliusClient::new(http_client, endpoints));
        Ok(build_proxy_router(state, security))
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn run<F>(
        self,
        listener: tokio::net::TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router()?;
        tracing::info!("Relay listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

        Ok(())
    }
}
