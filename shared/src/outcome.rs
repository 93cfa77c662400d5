//! Action outcomes
//!
//! Handlers report both success and failure as ordinary values so that the
//! transport layer can turn any outcome into a protocol response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Protocol status codes used by actuators
pub mod status {
    pub const OK: u32 = 200;
    pub const BAD_REQUEST: u32 = 400;
    pub const NOT_IMPLEMENTED: u32 = 501;

    /// Reason phrase for a status code
    pub fn reason(code: u32) -> &'static str {
        match code {
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Error",
            501 => "Not Implemented",
            _ => "Unknown",
        }
    }
}

/// Successful handler output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ActionResponse {
    /// Plain 200 response without data
    pub fn ok() -> Self {
        Self {
            status: status::OK,
            data: None,
        }
    }

    /// 200 response carrying a data payload
    pub fn with_data(data: Value) -> Self {
        Self {
            status: status::OK,
            data: Some(data),
        }
    }
}

/// Structured failure outcomes of a dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A handler exists for the target but is a placeholder
    #[error("Not Implemented")]
    NotImplemented,

    /// The action domain is known but has no handler for the target
    #[error("Target not implemented")]
    TargetNotImplemented,

    /// The actuator has no registry for the action domain at all
    #[error("Action not implemented: {0}")]
    UnknownDomain(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl ActionError {
    /// Protocol status code for this outcome
    pub fn status(&self) -> u32 {
        match self {
            ActionError::NotImplemented
            | ActionError::TargetNotImplemented
            | ActionError::UnknownDomain(_) => status::NOT_IMPLEMENTED,
            ActionError::BadRequest(_) => status::BAD_REQUEST,
        }
    }
}

/// What every handler returns
pub type ActionResult = Result<ActionResponse, ActionError>;
