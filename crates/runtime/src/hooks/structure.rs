use combat_core::{EvaluationMode, UnitType};

use crate::automation::RollKind;

use super::{AutomationHook, HookContext};

/// Critical-hit checks for damage that reached internal structure.
///
/// IndustrialMeks are fragile and roll twice.
#[derive(Debug, Clone, Copy)]
pub struct StructureCritHook;

impl AutomationHook for StructureCritHook {
    fn name(&self) -> &'static str {
        "structure_crit"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        let current = ctx
            .state
            .structure_damage(ctx.reference, EvaluationMode::Committed);
        current > ctx.trigger.previous_structure_damage
    }

    fn create_requests(&self, ctx: &HookContext<'_>) -> Vec<RollKind> {
        match ctx.reference.unit_type {
            UnitType::IndustrialMek => vec![RollKind::CriticalHit, RollKind::CriticalHit],
            _ => vec![RollKind::CriticalHit],
        }
    }
}
