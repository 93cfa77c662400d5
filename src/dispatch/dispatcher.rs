//! Actuator dispatcher - routes requests to the registry for their domain

use std::collections::{BTreeMap, HashMap};

use actuator_shared::{ActionError, ActionResult, Args};
use tracing::{debug, warn};

use super::registry::ActionRegistry;
use super::Request;
use crate::actuator::ActuatorContext;

/// Aggregates one `ActionRegistry` per action domain
///
/// Registries are added during startup; afterwards dispatch only needs `&self`
/// and can run from any number of tasks at once.
#[derive(Debug, Default)]
pub struct ActuatorDispatcher {
    registries: HashMap<String, ActionRegistry>,
}

impl ActuatorDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registry under its domain, returning the one it replaced
    pub fn register_dispatch(&mut self, registry: ActionRegistry) -> Option<ActionRegistry> {
        let domain = registry.domain().to_string();
        let replaced = self.registries.insert(domain.clone(), registry);
        if replaced.is_some() {
            debug!("Replaced registry for domain '{}'", domain);
        }
        replaced
    }

    /// Route to the registry for `domain`, then to the handler for `key`
    pub fn dispatch(
        &self,
        domain: &str,
        key: &str,
        ctx: &ActuatorContext,
        target: &[String],
        args: &Args,
    ) -> ActionResult {
        match self.registries.get(domain) {
            Some(registry) => registry.dispatch(key, ctx, target, args),
            None => {
                warn!("Action domain '{}' is not supported by {}", domain, ctx.actuator_id);
                Err(ActionError::UnknownDomain(domain.to_string()))
            }
        }
    }

    pub fn dispatch_request(&self, request: &Request, ctx: &ActuatorContext) -> ActionResult {
        self.dispatch(&request.domain, &request.key, ctx, &request.target, &request.args)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.registries.contains_key(domain)
    }

    /// Registered domains, sorted
    pub fn domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.registries.keys().cloned().collect();
        domains.sort();
        domains
    }

    /// Domain -> explicitly registered keys
    pub fn pairs(&self) -> BTreeMap<String, Vec<String>> {
        self.registries
            .iter()
            .map(|(domain, registry)| (domain.clone(), registry.keys()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::ActuatorProfile;
    use actuator_shared::ActionResponse;
    use std::sync::Arc;

    fn target_not_implemented(_: &ActuatorContext, _: &[String], _: &Args) -> ActionResult {
        Err(ActionError::TargetNotImplemented)
    }

    fn not_implemented(_: &ActuatorContext, _: &[String], _: &Args) -> ActionResult {
        Err(ActionError::NotImplemented)
    }

    fn ok(_: &ActuatorContext, _: &[String], _: &Args) -> ActionResult {
        Ok(ActionResponse::ok())
    }

    fn create_test_dispatcher() -> ActuatorDispatcher {
        let scan = ActionRegistry::builder("scan")
            .register_default(target_not_implemented)
            .register("acdci_dsr:geospace", ok)
            .build()
            .unwrap();
        let locate = ActionRegistry::builder("locate")
            .register_default(target_not_implemented)
            .register("device", not_implemented)
            .build()
            .unwrap();

        let mut dispatcher = ActuatorDispatcher::new();
        dispatcher.register_dispatch(scan);
        dispatcher.register_dispatch(locate);
        dispatcher
    }

    fn ctx() -> ActuatorContext {
        ActuatorContext::new("act-test", ActuatorProfile::All)
    }

    #[test]
    fn test_scan_geospace_returns_ok() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.dispatch("scan", "acdci_dsr:geospace", &ctx(), &[], &Args::new());
        assert_eq!(result, Ok(ActionResponse { status: 200, data: None }));
    }

    #[test]
    fn test_unknown_key_uses_domain_default() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.dispatch("scan", "unknown_key", &ctx(), &[], &Args::new());
        assert_eq!(result, Err(ActionError::TargetNotImplemented));
    }

    #[test]
    fn test_placeholder_handler_is_not_target_fallback() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.dispatch("locate", "device", &ctx(), &[], &Args::new());
        assert_eq!(result, Err(ActionError::NotImplemented));
    }

    #[test]
    fn test_unknown_domain() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.dispatch("nonexistent_domain", "x", &ctx(), &[], &Args::new());
        assert_eq!(result, Err(ActionError::UnknownDomain("nonexistent_domain".into())));

        // A key that exists in another domain must not leak across
        let result = dispatcher.dispatch("deny", "device", &ctx(), &[], &Args::new());
        assert_eq!(result, Err(ActionError::UnknownDomain("deny".into())));
    }

    #[test]
    fn test_reregistering_domain_replaces_registry() {
        let mut dispatcher = create_test_dispatcher();
        let replacement = ActionRegistry::new("scan", not_implemented);

        let old = dispatcher.register_dispatch(replacement);
        assert_eq!(old.map(|r| r.keys()), Some(vec!["acdci_dsr:geospace".to_string()]));

        let result = dispatcher.dispatch("scan", "acdci_dsr:geospace", &ctx(), &[], &Args::new());
        assert_eq!(result, Err(ActionError::NotImplemented));
    }

    #[test]
    fn test_dispatch_request() {
        let dispatcher = create_test_dispatcher();
        let request = Request::new("scan", "acdci_dsr:geospace")
            .with_target(vec!["192.168.1.0/24".into()]);
        assert!(dispatcher.dispatch_request(&request, &ctx()).is_ok());
    }

    #[test]
    fn test_domains_and_pairs() {
        let dispatcher = create_test_dispatcher();
        assert!(dispatcher.contains("scan"));
        assert!(!dispatcher.contains("query"));
        assert_eq!(dispatcher.domains(), vec!["locate".to_string(), "scan".to_string()]);

        let pairs = dispatcher.pairs();
        assert_eq!(pairs["scan"], vec!["acdci_dsr:geospace".to_string()]);
        assert_eq!(pairs["locate"], vec!["device".to_string()]);
    }

    #[test]
    fn test_concurrent_dispatch() {
        let dispatcher = Arc::new(create_test_dispatcher());
        let ctx = Arc::new(ctx());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let dispatcher = Arc::clone(&dispatcher);
                let ctx = Arc::clone(&ctx);
                std::thread::spawn(move || {
                    let key = if i % 2 == 0 { "acdci_dsr:geospace" } else { "other" };
                    (i, dispatcher.dispatch("scan", key, &ctx, &[], &Args::new()))
                })
            })
            .collect();

        for handle in handles {
            let (i, result) = handle.join().unwrap();
            if i % 2 == 0 {
                assert!(result.is_ok());
            } else {
                assert_eq!(result, Err(ActionError::TargetNotImplemented));
            }
        }
    }
}
