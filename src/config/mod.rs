//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (GatewayConfig::default)
//!     → loader.rs (optional TOML file)
//!     → loader.rs (API_URL environment override)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at start and never changes afterwards
//! - All fields have defaults so the gateway runs with no file at all

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError, API_URL_ENV, CONFIG_PATH_ENV};
pub use schema::{
    BackendConfig, GatewayConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig,
    DEFAULT_API_URL,
};
