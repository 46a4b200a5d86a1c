use crate::automation::RollKind;

use super::{AutomationHook, HookContext};

/// Units protected by barrier armor (`BAR` specials) check for critical hits
/// on any damage, even when only armor was lost.
#[derive(Debug, Clone, Copy)]
pub struct BarrierArmorHook;

impl BarrierArmorHook {
    pub const SPECIAL_PREFIX: &'static str = "BAR";
}

impl AutomationHook for BarrierArmorHook {
    fn name(&self) -> &'static str {
        "barrier_armor"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.reference.has_special_prefix(Self::SPECIAL_PREFIX)
    }

    fn create_requests(&self, _ctx: &HookContext<'_>) -> Vec<RollKind> {
        vec![RollKind::CriticalHit]
    }
}
