//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; fields over formatted strings
//! - `RUST_LOG` overrides the configured filter when set
//! - Request-level visibility comes from `tower_http::trace::TraceLayer`

pub mod logging;

pub use logging::init_tracing;
