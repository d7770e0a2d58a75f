//! Upstream miner API subsystem.
//!
//! # Data Flow
//! ```text
//! wallet address (opaque string)
//!     → client.rs (single GET /user_address/{wallet})
//!     → upstream JSON payload (serde_json::Value, unvalidated)
//! ```
//!
//! # Design Decisions
//! - The payload is opaque: no schema types, no field filtering
//! - Exactly one outbound call per lookup; no retry, no fallback
//! - The fixed User-Agent identifies the dashboard to the upstream
//! - Failure causes are distinguished internally but collapse to one
//!   client-facing error shape at the HTTP layer

pub mod client;

pub use client::{MinerApi, UpstreamError};
