//! Ordered route classification.

use axum::http::Method;

/// The two outcomes a request can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// POST /api: proxy the miner stats lookup to the upstream service.
    ApiProxy,
    /// Everything else: serve the embedded dashboard document.
    StaticPage,
}

impl Route {
    /// Classify a request by method and path. Rules are checked in order;
    /// first match wins.
    pub fn classify(method: &Method, path: &str) -> Self {
        if method == Method::POST && path == "/api" {
            return Self::ApiProxy;
        }
        Self::StaticPage
    }
}
