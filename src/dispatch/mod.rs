//! Action dispatch infrastructure
//!
//! This module handles:
//! - Registering handlers per action domain, with a mandatory default handler
//! - Routing a (domain, key) pair to the matching handler
//! - Reporting unknown domains separately from unknown targets

mod dispatcher;
mod handler;
mod registry;

pub use dispatcher::ActuatorDispatcher;
pub use handler::{ActionHandler, SharedHandler};
pub use registry::{ActionRegistry, RegistryBuilder, RegistryError};

use actuator_shared::Args;

/// A fully resolved dispatch request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub domain: String,
    pub key: String,
    pub target: Vec<String>,
    pub args: Args,
}

impl Request {
    /// Create a request with an empty target list and empty args
    pub fn new(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            key: key.into(),
            target: Vec::new(),
            args: Args::new(),
        }
    }

    pub fn with_target(mut self, target: Vec<String>) -> Self {
        self.target = target;
        self
    }

    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }
}
