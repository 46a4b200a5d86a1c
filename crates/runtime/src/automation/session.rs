use combat_core::{CombatState, DiceRoll, UnitReference};
use tracing::{debug, info};

use crate::dice::DiceSource;
use crate::error::{AutomationError, Result};

use super::outcome::{RolledOutcome, StepOutcome, apply_outcome, resolve_roll};
use super::RollRequest;

/// Interactive resolution of one roll request.
///
/// The roll may be made (or supplied) any number of times; only
/// [`confirm`](Self::confirm) touches the combat record. Dropping the
/// session abandons the roll.
#[derive(Debug)]
pub struct RollSession<'a> {
    reference: &'a UnitReference,
    request: RollRequest,
    step: usize,
    rolled: Option<RolledOutcome>,
    attempts: u32,
}

impl<'a> RollSession<'a> {
    pub fn new(reference: &'a UnitReference, request: RollRequest, step: usize) -> Self {
        Self {
            reference,
            request,
            step,
            rolled: None,
            attempts: 0,
        }
    }

    pub fn request(&self) -> RollRequest {
        self.request
    }

    /// Number of times the roll was made or supplied.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn outcome(&self) -> Option<&RolledOutcome> {
        self.rolled.as_ref()
    }

    /// Rolls (or re-rolls) with `dice`, replacing any earlier result.
    pub fn roll(&mut self, dice: &mut dyn DiceSource) -> Result<&RolledOutcome> {
        let roll = dice.roll_2d6()?;
        Ok(self.set_roll(roll))
    }

    /// Uses an externally rolled result, replacing any earlier result.
    pub fn set_roll(&mut self, roll: DiceRoll) -> &RolledOutcome {
        self.attempts += 1;
        let outcome = resolve_roll(self.reference, self.request, roll);
        debug!(
            target: "runtime::automation",
            unit = %self.reference.name,
            kind = %self.request.kind,
            roll = %roll,
            total = outcome.total,
            effect = ?outcome.effect,
            attempt = self.attempts,
            "Rolled"
        );
        self.rolled.insert(outcome)
    }

    /// Applies the current roll as one atomic commit.
    pub fn confirm(self, state: &mut CombatState) -> Result<StepOutcome> {
        let rolled = self.rolled.ok_or(AutomationError::NotRolled)?;
        let result = apply_outcome(self.reference, state, &rolled, self.step)?;

        info!(
            target: "runtime::automation",
            unit = %self.reference.name,
            step = self.step,
            kind = %self.request.kind,
            hook = self.request.hook,
            total = rolled.total,
            result = ?result,
            "Roll confirmed"
        );
        Ok(result)
    }
}
