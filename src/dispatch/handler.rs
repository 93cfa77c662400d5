//! Handler abstraction for pluggable actions

use std::sync::Arc;

use actuator_shared::{ActionResult, Args};

use crate::actuator::ActuatorContext;

/// A single action implementation within a domain
///
/// `args` is an open object: entries a handler does not know about are
/// ignored, so callers can pass new arguments without breaking handlers.
pub trait ActionHandler: Send + Sync {
    fn handle(&self, ctx: &ActuatorContext, target: &[String], args: &Args) -> ActionResult;
}

impl<F> ActionHandler for F
where
    F: Fn(&ActuatorContext, &[String], &Args) -> ActionResult + Send + Sync,
{
    fn handle(&self, ctx: &ActuatorContext, target: &[String], args: &Args) -> ActionResult {
        self(ctx, target, args)
    }
}

/// Handler stored in a registry
pub type SharedHandler = Arc<dyn ActionHandler>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::ActuatorProfile;
    use actuator_shared::{ActionError, ActionResponse};
    use serde_json::json;

    struct EchoTarget;

    impl ActionHandler for EchoTarget {
        fn handle(&self, _ctx: &ActuatorContext, target: &[String], _args: &Args) -> ActionResult {
            Ok(ActionResponse::with_data(json!(target)))
        }
    }

    fn placeholder(_ctx: &ActuatorContext, _target: &[String], _args: &Args) -> ActionResult {
        Err(ActionError::NotImplemented)
    }

    #[test]
    fn test_struct_and_fn_handlers() {
        let ctx = ActuatorContext::new("act-1", ActuatorProfile::All);
        let target = vec!["host-a".to_string()];

        let echo: SharedHandler = Arc::new(EchoTarget);
        let resp = echo.handle(&ctx, &target, &Args::new()).unwrap();
        assert_eq!(resp.data, Some(json!(["host-a"])));

        let stub: SharedHandler = Arc::new(placeholder);
        assert_eq!(
            stub.handle(&ctx, &target, &Args::new()),
            Err(ActionError::NotImplemented)
        );
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        let ctx = ActuatorContext::new("act-1", ActuatorProfile::All);
        let mut args = Args::new();
        args.insert("added_later".into(), json!(true));

        let resp = EchoTarget.handle(&ctx, &[], &args).unwrap();
        assert_eq!(resp.status, 200);
    }
}
