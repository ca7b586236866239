//! Backend API access.
//!
//! # Data Flow
//! ```text
//! user handler
//!     → client.rs (URL templating, one reqwest call)
//!     → backend API
//!     → client.rs (status + decoded JSON)
//!     → BackendResponse back to the handler
//! ```

pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{BackendResponse, InvalidUserId, UserId};
