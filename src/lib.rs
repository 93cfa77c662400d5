//! Actuator device
//!
//! Simulated actuator endpoints that route named target-actions to
//! registered handlers, plus the TCP server that exposes them.

pub mod actions;
pub mod actuator;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod server;

pub use actuator::{Actuator, ActuatorContext, ActuatorProfile};
pub use config::{ActuatorConfig, ConfigError};
pub use dispatch::{ActionHandler, ActionRegistry, ActuatorDispatcher, RegistryError, Request};
