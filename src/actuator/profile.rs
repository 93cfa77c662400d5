//! Actuator profiles - which action domains a device exposes

use std::fmt;
use std::str::FromStr;

use crate::actions::{deny, locate, query, scan};
use crate::config::ConfigError;
use crate::dispatch::{ActionRegistry, RegistryError};

/// Simulated device types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuatorProfile {
    /// Geospatial scanner
    AcdciUc1,
    /// Device locator
    Srs,
    /// Firewall-style deny/query endpoint
    AcdciUc6,
    /// Every domain, for development and simulation
    #[default]
    All,
}

impl ActuatorProfile {
    pub fn name(&self) -> &'static str {
        match self {
            ActuatorProfile::AcdciUc1 => "acdci-uc1",
            ActuatorProfile::Srs => "srs",
            ActuatorProfile::AcdciUc6 => "acdci-uc6",
            ActuatorProfile::All => "all",
        }
    }

    /// Build the registries this profile serves
    pub fn registries(&self) -> Result<Vec<ActionRegistry>, RegistryError> {
        let registries = match self {
            ActuatorProfile::AcdciUc1 => vec![scan::registry()?],
            ActuatorProfile::Srs => vec![locate::registry()?],
            ActuatorProfile::AcdciUc6 => vec![deny::registry()?, query::registry()?],
            ActuatorProfile::All => vec![
                scan::registry()?,
                locate::registry()?,
                deny::registry()?,
                query::registry()?,
            ],
        };
        Ok(registries)
    }
}

impl fmt::Display for ActuatorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActuatorProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "acdci-uc1" => Ok(ActuatorProfile::AcdciUc1),
            "srs" => Ok(ActuatorProfile::Srs),
            "acdci-uc6" => Ok(ActuatorProfile::AcdciUc6),
            "all" => Ok(ActuatorProfile::All),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}
