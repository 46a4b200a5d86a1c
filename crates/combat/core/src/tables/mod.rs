//! Dice tables consulted by the damage automation pipeline.
//!
//! The tables are pure lookups: callers roll (or receive) two six-sided dice,
//! wrap them in a [`DiceRoll`] and ask the table what happens.

mod critical;
mod motive;

pub use critical::{AmmoResolution, CritOutcome, critical_outcome, resolve_ammo_hit};
pub use motive::{motive_outcome, motive_total};

use crate::error::{EngineError, ErrorSeverity};

/// A validated 2d6 result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    first: u8,
    second: u8,
}

impl DiceRoll {
    pub const FACES: u8 = 6;

    pub fn new(first: u8, second: u8) -> Result<Self, DiceError> {
        for face in [first, second] {
            if !(1..=Self::FACES).contains(&face) {
                return Err(DiceError::FaceOutOfRange { face });
            }
        }
        Ok(Self { first, second })
    }

    pub const fn faces(&self) -> (u8, u8) {
        (self.first, self.second)
    }

    pub const fn total(&self) -> u32 {
        self.first as u32 + self.second as u32
    }
}

impl core::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}+{}={}", self.first, self.second, self.total())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("die face {face} is outside 1..=6")]
    FaceOutOfRange { face: u8 },
}

impl EngineError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FaceOutOfRange { .. } => "DICE_FACE_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_faces_are_validated() {
        assert_eq!(DiceRoll::new(3, 6).map(|r| r.total()), Ok(9));
        assert_eq!(
            DiceRoll::new(0, 4),
            Err(DiceError::FaceOutOfRange { face: 0 })
        );
        assert!(DiceRoll::new(2, 7).is_err());
    }
}
