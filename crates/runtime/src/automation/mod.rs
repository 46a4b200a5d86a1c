//! Damage automation pipeline.
//!
//! After damage is committed the pipeline asks the hook registry which
//! follow-on rolls the unit owes, then resolves them one by one:
//!
//! ```text
//! commit damage ──► DamageTrigger ──► HookRegistry ──► [RollRequest]
//!                        ▲                                   │
//!                        │                                   ▼
//!                 extra damage ◄── confirm (1 commit) ◄── RollSession
//! ```
//!
//! Each confirmed roll is its own atomic commit. When a step fails, the
//! steps before it stay committed and the caller receives the partial
//! report together with the error.

mod outcome;
mod request;
mod session;

pub use outcome::{RollEffect, RolledOutcome, StepOutcome, resolve_roll};
pub use request::{DamageTrigger, RollKind, RollRequest};
pub use session::RollSession;

use std::collections::VecDeque;

use combat_core::{
    CombatState, CritKey, EngineConfig, EngineError, EvaluationMode, Resolver, UnitReference,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dice::DiceSource;
use crate::error::AutomationError;
use crate::hooks::{HookContext, HookRegistry};

/// Follow-up damage may re-trigger hooks at most this many times.
pub const MAX_CHAIN_DEPTH: usize = 8;

/// One confirmed roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: usize,
    /// 0 for rolls owed by the original damage, +1 per follow-up level.
    pub depth: usize,
    pub rolled: RolledOutcome,
    pub result: StepOutcome,
}

/// Steps completed by a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutomationReport {
    pub steps: Vec<StepRecord>,
    /// Requests dropped because the unit was already destroyed.
    pub skipped: Vec<RollRequest>,
}

impl AutomationReport {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.skipped.is_empty()
    }

    /// Critical hits committed by the run, in order.
    pub fn crits_applied(&self) -> Vec<CritKey> {
        self.steps
            .iter()
            .filter_map(|s| match s.result {
                StepOutcome::CritApplied(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    pub fn destroyed(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.result == StepOutcome::Destroyed)
    }
}

/// A run that stopped early; `completed` steps remain committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("automation stopped after {} completed step(s)", .completed.steps.len())]
pub struct PartialAutomation {
    pub completed: AutomationReport,
    #[source]
    pub error: AutomationError,
}

/// Damage automation pipeline.
pub struct DamageAutomation {
    config: EngineConfig,
    registry: HookRegistry,
}

impl DamageAutomation {
    /// Pipeline with the default hooks.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, HookRegistry::default_hooks())
    }

    pub fn with_registry(config: EngineConfig, registry: HookRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rolls owed for a committed damage step. Pure.
    ///
    /// Nothing is owed when automation is disabled or exempts the unit type,
    /// or when the step did not add damage.
    pub fn requests(
        &self,
        reference: &UnitReference,
        state: &CombatState,
        trigger: &DamageTrigger,
    ) -> Vec<RollRequest> {
        if !self.config.automation.applies_to(reference.unit_type) {
            debug!(
                target: "runtime::automation",
                unit = %reference.name,
                unit_type = %reference.unit_type,
                "Automation not applicable"
            );
            return Vec::new();
        }
        if trigger.applied <= 0 {
            return Vec::new();
        }

        let ctx = HookContext {
            reference,
            state,
            trigger,
            config: &self.config,
        };
        let requests = self.registry.evaluate(&ctx);
        debug!(
            target: "runtime::automation",
            unit = %reference.name,
            applied = trigger.applied,
            rolls = requests.len(),
            "Evaluated damage hooks"
        );
        requests
    }

    /// Starts an interactive session for one request.
    pub fn session<'a>(
        &self,
        reference: &'a UnitReference,
        request: RollRequest,
        step: usize,
    ) -> RollSession<'a> {
        RollSession::new(reference, request, step)
    }

    /// Resolves every owed roll with `dice`, confirming each as it comes.
    ///
    /// Rolls are skipped once the unit is destroyed. The run stops at the
    /// first failing step; the error carries the steps already committed.
    pub fn run(
        &self,
        reference: &UnitReference,
        state: &mut CombatState,
        trigger: &DamageTrigger,
        dice: &mut dyn DiceSource,
    ) -> Result<AutomationReport, PartialAutomation> {
        let mut queue: VecDeque<(RollRequest, usize)> = self
            .requests(reference, state, trigger)
            .into_iter()
            .map(|request| (request, 0))
            .collect();
        let mut report = AutomationReport::default();

        while let Some((request, depth)) = queue.pop_front() {
            let destroyed = Resolver::new(reference, state, &self.config.resolver)
                .with_mode(EvaluationMode::Committed)
                .is_destroyed();
            if destroyed {
                debug!(
                    target: "runtime::automation",
                    unit = %reference.name,
                    kind = %request.kind,
                    "Unit destroyed, skipping roll"
                );
                report.skipped.push(request);
                continue;
            }

            let step = report.steps.len();
            let mut session = self.session(reference, request, step);
            let rolled = match session.roll(dice) {
                Ok(rolled) => rolled.clone(),
                Err(error) => return Err(fail(report, error)),
            };
            let result = match session.confirm(state) {
                Ok(result) => result,
                Err(error) => return Err(fail(report, error)),
            };

            let follow_ups = match &result {
                StepOutcome::ExtraDamage { receipt, .. } => {
                    self.requests(reference, state, &DamageTrigger::from_receipt(receipt))
                }
                _ => Vec::new(),
            };

            report.steps.push(StepRecord {
                step,
                depth,
                rolled,
                result,
            });

            if !follow_ups.is_empty() {
                if depth + 1 > MAX_CHAIN_DEPTH {
                    let error = AutomationError::HookChainTooDeep {
                        max: MAX_CHAIN_DEPTH,
                    };
                    return Err(fail(report, error));
                }
                queue.extend(follow_ups.into_iter().map(|r| (r, depth + 1)));
            }
        }

        info!(
            target: "runtime::automation",
            unit = %reference.name,
            steps = report.steps.len(),
            skipped = report.skipped.len(),
            "Automation complete"
        );
        Ok(report)
    }
}

fn fail(completed: AutomationReport, error: AutomationError) -> PartialAutomation {
    warn!(
        target: "runtime::automation",
        completed = completed.steps.len(),
        code = error.error_code(),
        error = %error,
        "Automation stopped"
    );
    PartialAutomation { completed, error }
}
