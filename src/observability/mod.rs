//! Observability subsystem.
//!
//! Structured logging through `tracing`; per-request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server.

pub mod logging;

pub use logging::init_logging;
