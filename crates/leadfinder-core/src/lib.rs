//! Domain types and configuration shared across the lead finder workspace.

pub mod app_config;
pub mod config;
pub mod lead;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{lead_id, FilterCriteria, Lead, LeadStatus, RawLeadRecord};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid lead status: {0}")]
    InvalidStatus(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
