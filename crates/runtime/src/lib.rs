//! Damage automation for the combat engine.
//!
//! This crate sits between a caller that commits damage to a unit and the
//! deterministic [`combat_core`] engine. It decides which follow-on rolls the
//! damage owes, takes dice results from an injected source and applies each
//! confirmed result as its own commit.
//!
//! Modules are organized by responsibility:
//! - [`automation`] hosts the pipeline, roll sessions and reports
//! - [`hooks`] provides the damage hook system that produces roll requests
//! - [`dice`] provides dice sources (seeded RNG and scripted rolls)
pub mod automation;
pub mod dice;
pub mod error;
pub mod hooks;

pub use automation::{
    AutomationReport, DamageAutomation, DamageTrigger, MAX_CHAIN_DEPTH, PartialAutomation,
    RollEffect, RollKind, RollRequest, RollSession, RolledOutcome, StepOutcome, StepRecord,
    resolve_roll,
};
pub use dice::{DiceSource, FixedDice, RandomDice};
pub use error::{AutomationError, Result};
pub use hooks::{
    AutomationHook, BarrierArmorHook, HookContext, HookRegistry, MotiveDamageHook,
    StructureCritHook,
};
