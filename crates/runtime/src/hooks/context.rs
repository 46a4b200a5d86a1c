//! Execution context provided to hooks during evaluation.

use combat_core::{CombatState, EngineConfig, UnitReference};

use crate::automation::DamageTrigger;

/// Read-only view of the damaged unit, bundled for hooks.
///
/// `state` is the record after the triggering commit.
pub struct HookContext<'a> {
    pub reference: &'a UnitReference,
    pub state: &'a CombatState,
    pub trigger: &'a DamageTrigger,
    pub config: &'a EngineConfig,
}
