//! Infrastructure: configuration/secret storage and dataset loading.

pub mod app_config;
pub mod config_storage;
pub mod dataset;
pub mod paths;
pub mod secret_storage;

pub use app_config::load_app_config;
pub use dataset::DatasetClient;
