mod app_config;
mod config;
mod products;

use thiserror::Error;

pub use app_config::{ApiLayout, AppConfig, DetailLookup, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Category, Product, CATEGORY_TABS, PLACEHOLDER_IMAGE_URL, UNNAMED_PRODUCT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
