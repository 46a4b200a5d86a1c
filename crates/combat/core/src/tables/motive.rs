use crate::reference::MotiveType;
use crate::state::CritKey;

use super::DiceRoll;

/// Motive-system damage roll: 2d6 plus the motive type modifier.
///
/// Unknown motive types roll unmodified.
pub fn motive_total(roll: DiceRoll, motive: Option<MotiveType>) -> i32 {
    roll.total() as i32 + motive.map_or(0, |m| m.roll_modifier())
}

/// Motive hit for a modified roll total, or `None` for no effect.
pub const fn motive_outcome(total: i32) -> Option<CritKey> {
    match total {
        i32::MIN..=8 => None,
        9 | 10 => Some(CritKey::Motive1),
        11 => Some(CritKey::Motive2),
        _ => Some(CritKey::Motive3),
    }
}
