//! Transit domain model.
//!
//! Jetties and routes are immutable once loaded; the dataset is read-only
//! for the remainder of the session.

mod dataset;
mod jetty;
mod route;

pub use dataset::Dataset;
pub use jetty::Jetty;
pub use route::{OperatorDetails, Route, RouteOperators};
