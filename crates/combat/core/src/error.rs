//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (e.g. [`StateError`](crate::state::StateError),
//! [`PvError`](crate::pv::PvError)) are defined next to the operations that
//! produce them. This module only holds the shared classification.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Expected outcomes are not errors**: a critical-hit slot that is already
//!   full is reported as a result value, never as an error

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can correct the input and retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Data/config mismatch, the call cannot proceed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - pending state is preserved for correction.
    ///
    /// Examples: pending damage exceeds remaining armor, pending heat below zero
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: pilot skill outside 0..=8, dice face outside 1..=6
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the request references something the unit cannot have.
    ///
    /// Examples: motive hit on a BattleMek, ability the unit does not carry
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a programming or data error.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for logging and for asserting on error kinds in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
