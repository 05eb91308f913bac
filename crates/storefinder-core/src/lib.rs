pub mod app_config;
pub mod config;
pub mod dataset;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{
    load_dataset, parse_dataset, parse_dataset_str, DatasetError, MalformedDatasetError,
    StoreTree, WRAPPER_KEY,
};
pub use store::{OperationHours, Store, Weekday};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
