//! Hook registry for evaluating damage hooks in priority order.

use std::sync::Arc;

use tracing::debug;

use crate::automation::RollRequest;

use super::{AutomationHook, HookContext};

/// Registry that holds the damage hooks, sorted by priority.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn AutomationHook>]>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Arc<dyn AutomationHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with the default set of hooks.
    ///
    /// Default hooks include:
    /// - BarrierArmorHook: crit check for `BAR` units on any damage
    /// - StructureCritHook: crit check(s) on new structure damage
    /// - MotiveDamageHook: motive roll for mobile ground vehicles
    pub fn default_hooks() -> Self {
        use super::{BarrierArmorHook, MotiveDamageHook, StructureCritHook};

        Self::new(vec![
            Arc::new(BarrierArmorHook) as Arc<dyn AutomationHook>,
            Arc::new(StructureCritHook) as Arc<dyn AutomationHook>,
            Arc::new(MotiveDamageHook) as Arc<dyn AutomationHook>,
        ])
    }

    /// Evaluates every hook and collects the rolls owed, in hook order.
    pub fn evaluate(&self, ctx: &HookContext<'_>) -> Vec<RollRequest> {
        let mut requests = Vec::new();

        for hook in self.hooks.iter() {
            if !hook.should_trigger(ctx) {
                continue;
            }

            let kinds = hook.create_requests(ctx);
            debug!(
                target: "runtime::hooks",
                hook = hook.name(),
                unit = %ctx.reference.name,
                rolls = kinds.len(),
                "Hook triggered"
            );
            requests.extend(kinds.into_iter().map(|kind| RollRequest {
                kind,
                hook: hook.name(),
            }));
        }

        requests
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}
