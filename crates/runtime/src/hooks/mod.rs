//! Damage hook system for the automation pipeline.
//!
//! Hooks inspect a committed damage step and decide which follow-on rolls
//! the unit owes. They never mutate state: each hook only returns roll
//! requests, and the pipeline applies confirmed results one atomic commit
//! at a time.
//!
//! # Architecture
//!
//! - Hooks are registered in a [`HookRegistry`] and sorted by priority
//! - After damage is committed, hooks are evaluated in priority order
//! - A hook that triggers contributes one or more [`RollKind`]s
//! - Damage produced by a confirmed roll re-enters the registry as a new
//!   trigger, up to a fixed chain depth

mod barrier;
mod context;
mod motive;
mod registry;
mod structure;

pub use barrier::BarrierArmorHook;
pub use context::HookContext;
pub use motive::MotiveDamageHook;
pub use registry::HookRegistry;
pub use structure::StructureCritHook;

use crate::automation::RollKind;

/// Hook that turns a damage step into follow-on roll requests.
///
/// # Execution Order
///
/// Hooks are sorted by priority (lower values execute first), which fixes
/// the order in which the resulting rolls are presented and applied.
pub trait AutomationHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Determines whether this hook applies to the damage step.
    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    /// Rolls owed when the hook triggers. Empty means nothing to roll.
    fn create_requests(&self, ctx: &HookContext<'_>) -> Vec<RollKind>;
}
