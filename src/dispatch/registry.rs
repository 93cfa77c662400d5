//! Per-domain handler registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use actuator_shared::{ActionResult, Args};
use thiserror::Error;
use tracing::debug;

use super::handler::{ActionHandler, SharedHandler};
use crate::actuator::ActuatorContext;

/// Errors raised while assembling a registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No default handler registered for domain '{domain}'")]
    MissingDefault { domain: String },
}

/// Maps target keys to handlers within one action domain
///
/// Every registry owns a default handler, so dispatching an unregistered
/// key always resolves to a handler.
pub struct ActionRegistry {
    domain: String,
    handlers: HashMap<String, SharedHandler>,
    default_handler: SharedHandler,
}

impl ActionRegistry {
    /// Create a registry with its mandatory default handler
    pub fn new(domain: impl Into<String>, default_handler: impl ActionHandler + 'static) -> Self {
        Self {
            domain: domain.into(),
            handlers: HashMap::new(),
            default_handler: Arc::new(default_handler),
        }
    }

    /// Start a builder that checks for a default handler on `build`
    pub fn builder(domain: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            domain: domain.into(),
            handlers: HashMap::new(),
            default_handler: None,
        }
    }

    /// Register a handler under `key`, replacing any previous one
    pub fn register(
        &mut self,
        key: impl Into<String>,
        handler: impl ActionHandler + 'static,
    ) -> &mut Self {
        let key = key.into();
        if self.handlers.insert(key.clone(), Arc::new(handler)).is_some() {
            debug!("[{}] Replaced handler for '{}'", self.domain, key);
        }
        self
    }

    /// Replace the default handler
    pub fn register_default(&mut self, handler: impl ActionHandler + 'static) -> &mut Self {
        self.default_handler = Arc::new(handler);
        self
    }

    /// Invoke the handler for `key`, or the default handler if none matches
    pub fn dispatch(
        &self,
        key: &str,
        ctx: &ActuatorContext,
        target: &[String],
        args: &Args,
    ) -> ActionResult {
        match self.handlers.get(key) {
            Some(handler) => {
                debug!("[{}] Dispatching '{}'", self.domain, key);
                handler.handle(ctx, target, args)
            }
            None => {
                debug!("[{}] No handler for '{}', using default", self.domain, key);
                self.default_handler.handle(ctx, target, args)
            }
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.handlers.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of keyed handlers (the default handler is not counted)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("domain", &self.domain)
            .field("keys", &self.keys())
            .finish()
    }
}

/// Collects registrations in any order before producing an `ActionRegistry`
pub struct RegistryBuilder {
    domain: String,
    handlers: HashMap<String, SharedHandler>,
    default_handler: Option<SharedHandler>,
}

impl RegistryBuilder {
    pub fn register(
        mut self,
        key: impl Into<String>,
        handler: impl ActionHandler + 'static,
    ) -> Self {
        self.handlers.insert(key.into(), Arc::new(handler));
        self
    }

    pub fn register_default(mut self, handler: impl ActionHandler + 'static) -> Self {
        self.default_handler = Some(Arc::new(handler));
        self
    }

    /// Finish the registry, failing if no default handler was supplied
    pub fn build(self) -> Result<ActionRegistry, RegistryError> {
        let default_handler = self.default_handler.ok_or_else(|| RegistryError::MissingDefault {
            domain: self.domain.clone(),
        })?;

        Ok(ActionRegistry {
            domain: self.domain,
            handlers: self.handlers,
            default_handler,
        })
    }
}
