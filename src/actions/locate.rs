//! Locate target handlers

use super::{not_implemented, target_not_implemented};
use crate::dispatch::{ActionRegistry, RegistryError};

pub const DOMAIN: &str = "locate";

pub fn registry() -> Result<ActionRegistry, RegistryError> {
    ActionRegistry::builder(DOMAIN)
        .register_default(target_not_implemented)
        .register("device", not_implemented)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::{ActuatorContext, ActuatorProfile};
    use actuator_shared::{ActionError, Args};

    #[test]
    fn test_locate_device_is_placeholder() {
        let ctx = ActuatorContext::new("srs", ActuatorProfile::Srs);
        let registry = registry().unwrap();

        assert_eq!(
            registry.dispatch("device", &ctx, &[], &Args::new()),
            Err(ActionError::NotImplemented)
        );
        assert_eq!(
            registry.dispatch("ip_addr", &ctx, &[], &Args::new()),
            Err(ActionError::TargetNotImplemented)
        );
    }
}
