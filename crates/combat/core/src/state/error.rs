//! Combat state errors.
//!
//! Errors raised while mutating or committing a [`CombatState`](super::CombatState).

use core::fmt;

use crate::error::{EngineError, ErrorSeverity};
use crate::reference::UnitType;

use super::CritKey;

/// A bounded quantity of the combat record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    Armor,
    Structure,
    Heat,
    Crit(CritKey),
    Ability(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Armor => f.write_str("armor damage"),
            Self::Structure => f.write_str("structure damage"),
            Self::Heat => f.write_str("heat"),
            Self::Crit(key) => write!(f, "{key} hits"),
            Self::Ability(key) => write!(f, "{key} uses"),
        }
    }
}

/// Errors that occur while mutating or committing combat state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Committed plus pending would leave `[0, max]`.
    ///
    /// The commit is rejected as a whole and the pending layer is kept so the
    /// caller can correct it.
    #[error("{quantity} would become {value} (allowed 0..={max})")]
    OutOfRange {
        quantity: Quantity,
        value: i64,
        max: u32,
    },

    /// The critical-hit key does not exist for this unit type.
    #[error("critical hit key '{key}' is not defined for unit type {unit_type}")]
    InvalidKey { key: CritKey, unit_type: UnitType },

    /// The unit does not carry the referenced ability.
    #[error("unit has no ability '{key}'")]
    UnknownAbility { key: String },
}

impl EngineError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // Pending values are preserved; the caller can fix and retry
            OutOfRange { .. } => ErrorSeverity::Recoverable,

            // Data/config mismatch between caller and reference data
            InvalidKey { .. } | UnknownAbility { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            OutOfRange { .. } => "STATE_OUT_OF_RANGE",
            InvalidKey { .. } => "STATE_INVALID_KEY",
            UnknownAbility { .. } => "STATE_UNKNOWN_ABILITY",
        }
    }
}
