use combat_core::{EvaluationMode, Resolver, UnitType};

use crate::automation::RollKind;

use super::{AutomationHook, HookContext};

/// Ground vehicles that can still move check for motive-system damage.
#[derive(Debug, Clone, Copy)]
pub struct MotiveDamageHook;

impl AutomationHook for MotiveDamageHook {
    fn name(&self) -> &'static str {
        "motive_damage"
    }

    fn priority(&self) -> i32 {
        30
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        if !matches!(
            ctx.reference.unit_type,
            UnitType::CombatVehicle | UnitType::SupportVehicle
        ) {
            return false;
        }

        Resolver::new(ctx.reference, ctx.state, &ctx.config.resolver)
            .with_mode(EvaluationMode::Committed)
            .movement()
            .values()
            .any(|&inches| inches > 0)
    }

    fn create_requests(&self, _ctx: &HookContext<'_>) -> Vec<RollKind> {
        vec![RollKind::MotiveDamage]
    }
}
