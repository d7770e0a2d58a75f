//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → routing (classify: api proxy or static page)
//!     → ApiProxy:   upstream client → relay JSON verbatim
//!     → StaticPage: dashboard.rs → embedded HTML document
//! ```

pub mod dashboard;
pub mod server;

pub use server::HttpServer;
