pub mod classify;
pub mod config;
pub mod error;
pub mod geo;
pub mod keywords;
pub mod markdown;
pub mod model;
pub mod scope;
pub mod session;

// Re-export common error type
pub use error::LagoonError;
