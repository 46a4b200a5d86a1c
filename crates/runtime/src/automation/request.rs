use core::fmt;

use combat_core::CommitReceipt;

/// Kind of follow-on roll owed after damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollKind {
    /// 2d6 on the unit category's critical-hit table.
    CriticalHit,
    /// 2d6 plus motive modifier on the motive-system damage table.
    MotiveDamage,
}

impl fmt::Display for RollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CriticalHit => f.write_str("critical hit"),
            Self::MotiveDamage => f.write_str("motive damage"),
        }
    }
}

/// A roll the unit owes, tagged with the hook that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    pub kind: RollKind,
    pub hook: &'static str,
}

/// Damage step that the pipeline reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageTrigger {
    /// Net damage committed by the step (armor plus structure).
    pub applied: i32,
    /// Committed structure damage before the step.
    pub previous_structure_damage: u32,
}

impl DamageTrigger {
    pub const fn new(applied: i32, previous_structure_damage: u32) -> Self {
        Self {
            applied,
            previous_structure_damage,
        }
    }

    pub fn from_receipt(receipt: &CommitReceipt) -> Self {
        Self::new(receipt.damage_applied(), receipt.structure_damage_before)
    }
}
