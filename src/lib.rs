//! PicLumen relay library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, response shapes and router setup used by the binary.
//! - `upstream`: Thin client for the PicLumen generation and task endpoints.
//! - `generation`: Generation request parameters and status-check outcomes.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `UpstreamClient`,
//! `GenerationRequest`, and `StatusResult`.
pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod upstream;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use generation::request::GenerationRequest;
pub use generation::status::StatusResult;
pub use upstream::client::UpstreamClient;
