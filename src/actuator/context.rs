//! Context handed to every action handler

use std::collections::BTreeMap;

use super::ActuatorProfile;

/// Identity and capabilities of the running actuator
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorContext {
    pub actuator_id: String,
    pub profile: ActuatorProfile,
    /// Action domain -> supported target keys
    pub pairs: BTreeMap<String, Vec<String>>,
}

impl ActuatorContext {
    pub fn new(actuator_id: impl Into<String>, profile: ActuatorProfile) -> Self {
        Self {
            actuator_id: actuator_id.into(),
            profile,
            pairs: BTreeMap::new(),
        }
    }

    pub fn with_pairs(mut self, pairs: BTreeMap<String, Vec<String>>) -> Self {
        self.pairs = pairs;
        self
    }
}
