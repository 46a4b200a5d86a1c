//! Deterministic combat-state engine for unit cards.
//!
//! `combat-core` holds the per-unit damage record with its pending/commit
//! protocol, the resolver that derives effective stats from it, and the dice
//! tables used by the damage automation pipeline. Everything here is pure:
//! no I/O, no logging, and dice results are always supplied by the caller.
//! All state mutation flows through [`state::CombatState`].
pub mod config;
pub mod error;
pub mod pv;
pub mod reference;
pub mod resolver;
pub mod state;
pub mod tables;
pub use config::{AutomationConfig, DamagePickerMode, EngineConfig, ResolverConfig};
pub use error::{EngineError, ErrorSeverity};
pub use pv::{BASELINE_SKILL, MAX_SKILL, PvError, adjusted_point_value};
pub use reference::{
    ArcDamage, ByRange, DamageByRange, DamageValue, FiringArc, GROUND_MODE, JUMP_MODE,
    MotiveType, MovementModes, ParseDamageError, RangeBand, UnitCategory, UnitReference,
    UnitType, WeaponColumn, is_jump_mode,
};
pub use resolver::{EffectiveStats, IMMOBILE_TMM, Resolver, ToHitModifiers, reduce_damage};
pub use state::{
    AbilityUsage, CombatState, CommitReceipt, CritEntry, CritKey, CriticalHitRecord,
    DamageSplit, EvaluationMode, MAX_HEAT, ParseCritKeyError, PendingFields, Quantity,
    StateError,
};
pub use tables::{
    AmmoResolution, CritOutcome, DiceError, DiceRoll, critical_outcome, motive_outcome,
    motive_total, resolve_ammo_hit,
};
