//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Parse CLI → Load config → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     OS signal or broadcast trigger → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Shutdown is a broadcast channel so tests can stop a server
//!   deterministically without sending process signals
//! - SIGTERM and Ctrl+C both trigger the same graceful path

pub mod shutdown;

pub use shutdown::{wait_for_signal, Shutdown};
