//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / read request ID)
//!     → index.rs (GET /) or users.rs (/api/users routes)
//!     → backend client → backend API
//!     → users.rs (relay status + JSON) or error.rs (5xx mapping)
//!     → Send to client
//! ```

pub mod index;
pub mod request;
pub mod server;
pub mod users;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
