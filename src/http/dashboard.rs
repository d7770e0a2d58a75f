//! The embedded dashboard document.
//!
//! The page is a fixed, unparameterized asset compiled into the binary. All
//! presentation logic (sorting payouts, running totals, table rendering)
//! runs client-side against the `/api` contract, so it can change without
//! touching the server.

use axum::response::Html;

/// The dashboard markup and client script, compiled in at build time.
pub const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// The static page response served for every non-API request.
pub fn page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
