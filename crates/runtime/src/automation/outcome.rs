//! Roll resolution (pure) and application (one atomic commit).

use combat_core::{
    AmmoResolution, CombatState, CommitReceipt, CritKey, CritOutcome, DiceRoll, EvaluationMode,
    UnitReference, critical_outcome, motive_outcome, motive_total, resolve_ammo_hit,
};

use crate::error::{AutomationError, Result};

use super::{RollKind, RollRequest};

/// What a roll would do if confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEffect {
    NoEffect,
    Crit(CritKey),
    Ammo(AmmoResolution),
    Destroyed,
    /// No automated table for this unit category.
    ManualResolution,
}

/// A roll and the effect it maps to; nothing is applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledOutcome {
    pub request: RollRequest,
    pub roll: DiceRoll,
    /// Modified total looked up on the table.
    pub total: i32,
    pub effect: RollEffect,
}

/// Result of confirming a roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    NoEffect,
    CritApplied(CritKey),
    /// The key is already at its maximum; nothing was committed.
    CapReached(CritKey),
    AmmoNegated,
    /// Vented ammunition damage, committed straight to structure.
    ExtraDamage {
        amount: u32,
        receipt: CommitReceipt,
    },
    Destroyed,
    ManualResolution,
}

/// Maps a roll to its effect for `reference`.
pub fn resolve_roll(reference: &UnitReference, request: RollRequest, roll: DiceRoll) -> RolledOutcome {
    let (total, effect) = match request.kind {
        RollKind::CriticalHit => {
            let total = roll.total();
            let effect = match critical_outcome(reference.category(), total) {
                None => RollEffect::ManualResolution,
                Some(CritOutcome::NoEffect) => RollEffect::NoEffect,
                Some(CritOutcome::Hit(key)) => RollEffect::Crit(key),
                Some(CritOutcome::AmmoHit) => RollEffect::Ammo(resolve_ammo_hit(reference)),
                Some(CritOutcome::Destroyed) => RollEffect::Destroyed,
            };
            (total as i32, effect)
        }
        RollKind::MotiveDamage => {
            let total = motive_total(roll, reference.motive_type());
            let effect = motive_outcome(total).map_or(RollEffect::NoEffect, RollEffect::Crit);
            (total, effect)
        }
    };

    RolledOutcome {
        request,
        roll,
        total,
        effect,
    }
}

/// Commits the effect of a confirmed roll as one atomic step.
///
/// The record must be clean. If the commit is rejected the step's own
/// pending changes are dropped so the record stays clean.
pub(crate) fn apply_outcome(
    reference: &UnitReference,
    state: &mut CombatState,
    outcome: &RolledOutcome,
    step: usize,
) -> Result<StepOutcome> {
    if state.is_dirty() {
        return Err(AutomationError::PendingChanges);
    }

    match outcome.effect {
        RollEffect::NoEffect => Ok(StepOutcome::NoEffect),
        RollEffect::ManualResolution => Ok(StepOutcome::ManualResolution),
        RollEffect::Ammo(AmmoResolution::Negated) => Ok(StepOutcome::AmmoNegated),
        RollEffect::Crit(key) => {
            let at_cap = reference
                .category()
                .crit_max(key)
                .is_some_and(|max| state.crit_count(key, EvaluationMode::Committed) >= max);
            if at_cap {
                return Ok(StepOutcome::CapReached(key));
            }

            state
                .apply_pending_crit(key, 1)
                .map_err(|e| AutomationError::commit(step, e))?;
            commit(reference, state, step)?;
            Ok(StepOutcome::CritApplied(key))
        }
        RollEffect::Ammo(AmmoResolution::ExtraDamage(extra)) => {
            let amount = extra.min(state.structure_remaining(reference, EvaluationMode::Committed));
            state.apply_pending_structure(amount as i32);
            let receipt = commit(reference, state, step)?;
            Ok(StepOutcome::ExtraDamage { amount, receipt })
        }
        RollEffect::Ammo(AmmoResolution::Destroyed) | RollEffect::Destroyed => {
            let armor = state.armor_remaining(reference, EvaluationMode::Committed);
            let structure = state.structure_remaining(reference, EvaluationMode::Committed);
            state.apply_pending_armor(armor as i32);
            state.apply_pending_structure(structure as i32);
            commit(reference, state, step)?;
            Ok(StepOutcome::Destroyed)
        }
    }
}

fn commit(reference: &UnitReference, state: &mut CombatState, step: usize) -> Result<CommitReceipt> {
    state.commit_pending(reference).map_err(|e| {
        state.discard_pending();
        AutomationError::commit(step, e)
    })
}
