//! Request classification subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → dispatch.rs (ordered classification)
//!     → Return: Route::ApiProxy or Route::StaticPage
//! ```
//!
//! # Design Decisions
//! - Classification is an explicit tagged variant, not cascading conditionals
//! - Exact path match on "/api"; no prefix or regex matching
//! - First rule wins; everything unmatched falls through to the static page
//! - Deterministic: same input always yields the same route

pub mod dispatch;

pub use dispatch::Route;
