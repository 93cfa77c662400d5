//! Scan target handlers

use actuator_shared::{ActionResponse, ActionResult, Args};
use tracing::info;

use super::target_not_implemented;
use crate::actuator::ActuatorContext;
use crate::dispatch::{ActionRegistry, RegistryError};

pub const DOMAIN: &str = "scan";

pub fn registry() -> Result<ActionRegistry, RegistryError> {
    ActionRegistry::builder(DOMAIN)
        .register_default(target_not_implemented)
        .register("acdci_dsr:geospace", geospace)
        .build()
}

/// Geospatial scan of the given areas
fn geospace(ctx: &ActuatorContext, target: &[String], _args: &Args) -> ActionResult {
    info!("[{}] SCAN geospace over {} area(s)", ctx.actuator_id, target.len());
    Ok(ActionResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::ActuatorProfile;
    use actuator_shared::ActionError;

    #[test]
    fn test_geospace() {
        let ctx = ActuatorContext::new("uc1", ActuatorProfile::AcdciUc1);
        let result = registry().unwrap().dispatch("acdci_dsr:geospace", &ctx, &[], &Args::new());
        assert_eq!(result, Ok(ActionResponse { status: 200, data: None }));
    }

    #[test]
    fn test_unknown_scan_target() {
        let ctx = ActuatorContext::new("uc1", ActuatorProfile::AcdciUc1);
        let result = registry().unwrap().dispatch("unknown_key", &ctx, &[], &Args::new());
        assert_eq!(result, Err(ActionError::TargetNotImplemented));
    }
}
