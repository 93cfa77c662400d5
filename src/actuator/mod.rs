//! Actuator assembly
//!
//! An actuator picks a profile, registers the action domains that profile
//! supports, and then serves commands read-only for the rest of its life.

mod context;
mod executor;
mod profile;

pub use context::ActuatorContext;
pub use executor::Actuator;
pub use profile::ActuatorProfile;
