//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all dispatch handler
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and serve with graceful shutdown
//! - Classify requests and either proxy the miner lookup or serve the page
//!
//! # Design Decisions
//! - One handler, explicit `Route` classification: the routing table is the
//!   contract, not an emergent property of handler registration order
//! - The upstream payload is relayed verbatim after JSON re-serialization
//! - Every proxy failure collapses to one client-facing 500 error shape

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::dashboard;
use crate::lifecycle::wait_for_signal;
use crate::routing::Route;
use crate::upstream::{MinerApi, UpstreamError};

/// Maximum inbound `/api` body size. Lookup bodies are a single wallet
/// address; anything near this cap is garbage.
const MAX_LOOKUP_BODY_BYTES: usize = 64 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: MinerApi,
}

/// HTTP server for the dashboard gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let api = MinerApi::from_config(&config.upstream)?;
        let state = AppState { api };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown signal arrives (OS signal or the broadcast channel).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    () = wait_for_signal() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Inbound lookup body for the `/api` route.
#[derive(Debug, Deserialize)]
struct LookupRequest {
    wallet: String,
}

/// Catch-all handler. Classifies the request and dispatches it.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let route = Route::classify(&method, &path);
    tracing::debug!(method = %method, path = %path, route = ?route, "Dispatching request");

    match route {
        Route::ApiProxy => api_proxy(state, request).await,
        Route::StaticPage => dashboard::page().into_response(),
    }
}

/// Proxy the miner stats lookup to the upstream service.
///
/// Any failure along the way (unreadable or malformed inbound body, upstream
/// non-success status, transport failure, non-JSON upstream body) maps to
/// the same 500 error shape.
async fn api_proxy(state: AppState, request: Request<Body>) -> Response {
    let body = match axum::body::to_bytes(request.into_body(), MAX_LOOKUP_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read lookup body");
            return proxy_error();
        }
    };

    let lookup: LookupRequest = match serde_json::from_slice(&body) {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed lookup body");
            return proxy_error();
        }
    };

    match state.api.user_address(&lookup.wallet).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            tracing::warn!(wallet = %lookup.wallet, error = %e, "Upstream lookup failed");
            proxy_error()
        }
    }
}

/// The one client-facing proxy error response.
fn proxy_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Invalid address or network issue." })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_error_has_the_fixed_shape() {
        let response = proxy_error();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
