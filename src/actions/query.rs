//! Query target handlers

use actuator_shared::{ActionError, ActionResponse, ActionResult, Args};
use serde_json::{json, Map, Value};

use super::target_not_implemented;
use crate::actuator::ActuatorContext;
use crate::dispatch::{ActionRegistry, RegistryError};

pub const DOMAIN: &str = "query";

/// Language versions this actuator speaks
pub const VERSIONS: &[&str] = &["1.0"];

pub fn registry() -> Result<ActionRegistry, RegistryError> {
    ActionRegistry::builder(DOMAIN)
        .register_default(target_not_implemented)
        .register("features", features)
        .build()
}

/// Report the requested features
///
/// `target` lists feature names. With no features requested the query is a
/// liveness check and returns a bare 200.
fn features(ctx: &ActuatorContext, target: &[String], _args: &Args) -> ActionResult {
    if target.is_empty() {
        return Ok(ActionResponse::ok());
    }

    let mut data = Map::new();
    for feature in target {
        let value = match feature.as_str() {
            "versions" => json!(VERSIONS),
            "profiles" => json!([ctx.profile.name()]),
            "pairs" => json!(ctx.pairs),
            other => {
                return Err(ActionError::BadRequest(format!("unknown feature '{}'", other)));
            }
        };
        data.insert(feature.clone(), value);
    }

    Ok(ActionResponse::with_data(Value::Object(data)))
}
