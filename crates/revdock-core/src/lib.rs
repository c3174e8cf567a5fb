//! Shared domain types and configuration for the revdock workspace.
//!
//! Everything here is platform-agnostic: review entities, the field rules
//! the import and submission paths share, the [`ReviewStore`] seam the
//! Admin API client implements, and environment-driven configuration.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod handle;
pub mod rating;
pub mod reviews;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use handle::is_valid_handle;
pub use rating::{parse_leading_int, parse_rating};
pub use reviews::{Review, ReviewDraft};
pub use store::{ProductWithReviews, ReviewListUpdate, ReviewStore, StoreError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
