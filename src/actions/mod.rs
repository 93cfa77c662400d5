//! Action domains served by the simulated actuators
//!
//! Each domain exposes a `registry()` that installs its default handler and
//! its keyed handlers. Handler bodies return canned outcomes.

pub mod deny;
pub mod locate;
pub mod query;
pub mod scan;

use actuator_shared::{ActionError, ActionResult, Args};

use crate::actuator::ActuatorContext;

/// Default handler shared by every domain
pub fn target_not_implemented(
    _ctx: &ActuatorContext,
    _target: &[String],
    _args: &Args,
) -> ActionResult {
    Err(ActionError::TargetNotImplemented)
}

/// Placeholder for a target that is registered but not built yet
pub fn not_implemented(_ctx: &ActuatorContext, _target: &[String], _args: &Args) -> ActionResult {
    Err(ActionError::NotImplemented)
}
