//! Actuator configuration

use std::net::{AddrParseError, SocketAddr};

use actuator_shared::limits;
use thiserror::Error;

use crate::actuator::ActuatorProfile;

pub const ENV_ACTUATOR_ID: &str = "ACTUATOR_ID";
pub const ENV_PROFILE: &str = "ACTUATOR_PROFILE";
pub const ENV_BIND: &str = "ACTUATOR_BIND";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown actuator profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Actuator id must not be empty")]
    EmptyActuatorId,
}

/// Startup configuration for the actuator device
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorConfig {
    pub actuator_id: String,
    pub profile: ActuatorProfile,
    pub bind_addr: SocketAddr,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            actuator_id: "actuator-001".into(),
            profile: ActuatorProfile::All,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], limits::DEFAULT_PORT)),
        }
    }
}

impl ActuatorConfig {
    /// Defaults overridden by `ACTUATOR_ID`, `ACTUATOR_PROFILE` and `ACTUATOR_BIND`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(id) = lookup(ENV_ACTUATOR_ID) {
            let id = id.trim();
            if id.is_empty() {
                return Err(ConfigError::EmptyActuatorId);
            }
            config.actuator_id = id.to_string();
        }

        if let Some(profile) = lookup(ENV_PROFILE) {
            config.profile = profile.parse()?;
        }

        if let Some(bind) = lookup(ENV_BIND) {
            config.bind_addr = bind
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: bind.clone(),
                    source,
                })?;
        }

        Ok(config)
    }
}
