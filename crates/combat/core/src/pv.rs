//! Point-value adjustment for pilot skill.

use crate::error::{EngineError, ErrorSeverity};

/// Skill at which the printed point value applies unchanged.
pub const BASELINE_SKILL: u8 = 4;
pub const MAX_SKILL: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PvError {
    #[error("skill {skill} is outside 0..={max}", max = MAX_SKILL)]
    SkillOutOfRange { skill: u8 },
}

impl EngineError for PvError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SkillOutOfRange { .. } => "PV_SKILL_OUT_OF_RANGE",
        }
    }
}

/// Point value of a unit fielded at `skill`.
///
/// Better pilots (lower skill) cost more and worse pilots cost less, in steps
/// that grow with the base value. The result never drops below 1.
pub fn adjusted_point_value(base: u32, skill: u8) -> Result<u32, PvError> {
    if skill > MAX_SKILL {
        return Err(PvError::SkillOutOfRange { skill });
    }

    let adjusted = match skill.cmp(&BASELINE_SKILL) {
        core::cmp::Ordering::Equal => base,
        core::cmp::Ordering::Greater => {
            let step = if base <= 14 { 1 } else { (base - 15) / 10 + 2 };
            base.saturating_sub(step * u32::from(skill - BASELINE_SKILL))
        }
        core::cmp::Ordering::Less => {
            let step = if base <= 7 { 1 } else { (base - 8) / 5 + 2 };
            base + step * u32::from(BASELINE_SKILL - skill)
        }
    };
    Ok(adjusted.max(1))
}
