//! Actuator Shared Protocol Types
//!
//! This crate provides the wire messages, action outcomes and codec shared by
//! actuator devices and the commander that drives them.

pub mod codec;
pub mod outcome;

use std::time::{SystemTime, UNIX_EPOCH};

use prost::Message;
use serde_json::{Map, Value};

pub use outcome::{status, ActionError, ActionResponse, ActionResult};

/// Argument object handed to action handlers
pub type Args = Map<String, Value>;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Limits and defaults for command traffic
pub mod limits {
    /// Default actuator listen port
    pub const DEFAULT_PORT: u16 = 8080;

    /// How long the commander waits for a response
    pub const COMMAND_RESPONSE_TIMEOUT_MS: u64 = 3000;

    /// Maximum frame payload (1 MB)
    pub const MAX_MESSAGE_SIZE: u32 = 1024 * 1024;
}

/// Command sent to an actuator
#[derive(Clone, PartialEq, Message)]
pub struct CommandRequest {
    #[prost(string, tag = "1")]
    pub request_id: String,

    /// Action domain, e.g. "scan"
    #[prost(string, tag = "2")]
    pub action: String,

    /// Target key within the action domain
    #[prost(string, tag = "3")]
    pub target: String,

    /// Target specifiers, handed to the handler as its `target` list
    /// (`target` above is the key that selects the handler)
    #[prost(string, repeated, tag = "4")]
    pub specifiers: Vec<String>,

    /// JSON object, empty when the command has no arguments
    #[prost(string, tag = "5")]
    pub args_json: String,
}

/// Reply produced by an actuator for one command
#[derive(Clone, PartialEq, Message)]
pub struct CommandResponse {
    #[prost(string, tag = "1")]
    pub request_id: String,

    #[prost(uint32, tag = "2")]
    pub status: u32,

    #[prost(string, tag = "3")]
    pub status_text: String,

    /// JSON value, empty when the handler returned no data
    #[prost(string, tag = "4")]
    pub results_json: String,

    #[prost(string, tag = "5")]
    pub actuator_id: String,

    #[prost(uint64, tag = "6")]
    pub processing_time_ms: u64,
}

impl CommandRequest {
    /// Create a request without specifiers or arguments
    pub fn new(
        request_id: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            action: action.into(),
            target: target.into(),
            specifiers: Vec::new(),
            args_json: String::new(),
        }
    }

    pub fn with_specifiers(mut self, specifiers: Vec<String>) -> Self {
        self.specifiers = specifiers;
        self
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        self.args_json = if args.is_empty() {
            String::new()
        } else {
            Value::Object(args.clone()).to_string()
        };
        self
    }

    /// Decode the argument object
    ///
    /// A missing payload resolves to a fresh empty object. Anything that is
    /// not a JSON object is a bad request.
    pub fn args(&self) -> Result<Args, ActionError> {
        if self.args_json.trim().is_empty() {
            return Ok(Args::new());
        }

        match serde_json::from_str::<Value>(&self.args_json) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ActionError::BadRequest(format!(
                "args must be a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(ActionError::BadRequest(format!("invalid args: {}", e))),
        }
    }
}

impl CommandResponse {
    /// Build a response from a handler outcome
    pub fn from_result(
        request_id: impl Into<String>,
        actuator_id: impl Into<String>,
        result: &ActionResult,
        processing_time_ms: u64,
    ) -> Self {
        let (status, status_text, results_json) = match result {
            Ok(resp) => (
                resp.status,
                status::reason(resp.status).to_string(),
                resp.data
                    .as_ref()
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            Err(err) => (err.status(), err.to_string(), String::new()),
        };

        Self {
            request_id: request_id.into(),
            status,
            status_text,
            results_json,
            actuator_id: actuator_id.into(),
            processing_time_ms,
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the results payload, if any
    pub fn results(&self) -> Option<Value> {
        if self.results_json.is_empty() {
            return None;
        }
        serde_json::from_str(&self.results_json).ok()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
