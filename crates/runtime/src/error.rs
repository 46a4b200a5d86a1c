//! Errors surfaced by the damage automation pipeline.

use combat_core::{DiceError, EngineError, ErrorSeverity, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutomationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomationError {
    /// A step's commit was rejected; earlier steps stay committed.
    #[error("step {step} failed to commit")]
    Commit {
        step: usize,
        #[source]
        source: StateError,
    },

    /// Roll confirmations commit on their own and need a clean record.
    #[error("unit has uncommitted changes; commit or discard them before confirming a roll")]
    PendingChanges,

    #[error("roll has not been made yet")]
    NotRolled,

    #[error("dice source produced an invalid roll")]
    Dice(#[from] DiceError),

    #[error("dice source ran out of rolls")]
    DiceExhausted,

    #[error("follow-up damage chained deeper than {max} levels")]
    HookChainTooDeep { max: usize },
}

impl AutomationError {
    pub(crate) fn commit(step: usize, source: StateError) -> Self {
        Self::Commit { step, source }
    }
}

impl EngineError for AutomationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Commit { source, .. } => source.severity(),
            Self::PendingChanges | Self::NotRolled => ErrorSeverity::Recoverable,
            Self::Dice(_) | Self::DiceExhausted => ErrorSeverity::Validation,
            Self::HookChainTooDeep { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Commit { .. } => "AUTOMATION_COMMIT",
            Self::PendingChanges => "AUTOMATION_PENDING_CHANGES",
            Self::NotRolled => "AUTOMATION_NOT_ROLLED",
            Self::Dice(_) => "AUTOMATION_DICE",
            Self::DiceExhausted => "AUTOMATION_DICE_EXHAUSTED",
            Self::HookChainTooDeep { .. } => "AUTOMATION_CHAIN_TOO_DEEP",
        }
    }
}
