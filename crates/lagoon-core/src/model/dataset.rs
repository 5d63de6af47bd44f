//! The session-level transit dataset.

use super::{Jetty, Route};
use serde::{Deserialize, Serialize};

/// The pair of record collections the assistant is grounded in.
///
/// Loaded once at startup from two fetched documents and read-only for
/// the remainder of the session. If the load fails the assistant stays
/// non-functional; no request is ever made against a missing dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub jetties: Vec<Jetty>,
    pub routes: Vec<Route>,
}

impl Dataset {
    pub fn new(jetties: Vec<Jetty>, routes: Vec<Route>) -> Self {
        Self { jetties, routes }
    }

    pub fn is_empty(&self) -> bool {
        self.jetties.is_empty() && self.routes.is_empty()
    }
}
