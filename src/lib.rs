//! User gateway library.
//!
//! A thin HTTP front-end that serves a single page and forwards user CRUD
//! calls to a backend API, relaying status codes and JSON bodies unchanged.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use backend::BackendClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
