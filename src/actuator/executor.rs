//! Actuator - validates and dispatches incoming commands

use actuator_shared::{now_ms, ActionError, ActionResult, CommandRequest, CommandResponse};
use tracing::{debug, info, warn};

use super::{ActuatorContext, ActuatorProfile};
use crate::dispatch::{ActuatorDispatcher, RegistryError};

/// A running actuator: its context plus the populated dispatcher
#[derive(Debug)]
pub struct Actuator {
    context: ActuatorContext,
    dispatcher: ActuatorDispatcher,
}

impl Actuator {
    /// Register every domain of `profile`
    ///
    /// Fails if any domain is missing its default handler, before the
    /// actuator can serve a single command.
    pub fn new(
        actuator_id: impl Into<String>,
        profile: ActuatorProfile,
    ) -> Result<Self, RegistryError> {
        let mut dispatcher = ActuatorDispatcher::new();
        for registry in profile.registries()? {
            dispatcher.register_dispatch(registry);
        }

        let context = ActuatorContext::new(actuator_id, profile).with_pairs(dispatcher.pairs());
        info!(
            "Actuator {} ready ({}): domains={:?}",
            context.actuator_id,
            profile,
            dispatcher.domains()
        );

        Ok(Self { context, dispatcher })
    }

    pub fn context(&self) -> &ActuatorContext {
        &self.context
    }

    pub fn dispatcher(&self) -> &ActuatorDispatcher {
        &self.dispatcher
    }

    /// Execute a command and build the response that goes back on the wire
    pub fn handle(&self, request: &CommandRequest) -> CommandResponse {
        let start_time = now_ms();

        debug!(
            "Executing command: id={} action={} target={}",
            request.request_id, request.action, request.target
        );

        let result = self.execute(request);

        match &result {
            Ok(resp) => debug!(
                "  Command {} completed: status={}",
                request.request_id, resp.status
            ),
            Err(e) => warn!("  Command {} not handled: {}", request.request_id, e),
        }

        let processing_time = now_ms().saturating_sub(start_time);
        CommandResponse::from_result(
            &request.request_id,
            &self.context.actuator_id,
            &result,
            processing_time,
        )
    }

    fn execute(&self, request: &CommandRequest) -> ActionResult {
        if request.action.trim().is_empty() {
            return Err(ActionError::BadRequest("missing action".into()));
        }

        let args = request.args()?;
        self.dispatcher.dispatch(
            &request.action,
            &request.target,
            &self.context,
            &request.specifiers,
            &args,
        )
    }
}
