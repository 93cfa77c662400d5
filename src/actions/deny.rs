//! Deny target handlers

use super::{not_implemented, target_not_implemented};
use crate::dispatch::{ActionRegistry, RegistryError};

pub const DOMAIN: &str = "deny";

pub fn registry() -> Result<ActionRegistry, RegistryError> {
    ActionRegistry::builder(DOMAIN)
        .register_default(target_not_implemented)
        .register("ip_connection", not_implemented)
        .build()
}
