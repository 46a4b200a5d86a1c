//! Movement modes and vehicle motive types.

use std::collections::BTreeMap;

/// Movement per mode label, in inches.
///
/// The empty label is the default ground mode, `"j"` is jump. Vehicles use
/// their motive letter (`"t"`, `"w"`, `"h"`, ...).
pub type MovementModes = BTreeMap<String, u32>;

/// Label of the default ground movement mode.
pub const GROUND_MODE: &str = "";

/// Label of jump movement.
pub const JUMP_MODE: &str = "j";

/// Returns true for jump movement, which heat never slows down.
pub fn is_jump_mode(label: &str) -> bool {
    label == JUMP_MODE
}

/// Vehicle motive system, used for the motive-damage roll modifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MotiveType {
    Tracked,
    Naval,
    Submarine,
    Rail,
    Wheeled,
    Hover,
    Vtol,
    Wige,
}

impl MotiveType {
    /// Modifier added to the 2d6 motive-damage roll.
    pub const fn roll_modifier(&self) -> i32 {
        match self {
            Self::Tracked | Self::Naval | Self::Submarine | Self::Rail => 0,
            Self::Wheeled | Self::Hover => 1,
            Self::Vtol | Self::Wige => 2,
        }
    }

    /// Maps a card movement label to its motive type.
    pub fn from_movement_label(label: &str) -> Option<Self> {
        match label {
            "t" => Some(Self::Tracked),
            "n" => Some(Self::Naval),
            "s" => Some(Self::Submarine),
            "r" => Some(Self::Rail),
            "w" => Some(Self::Wheeled),
            "h" => Some(Self::Hover),
            "v" => Some(Self::Vtol),
            "g" => Some(Self::Wige),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_modifiers_by_family() {
        assert_eq!(MotiveType::Tracked.roll_modifier(), 0);
        assert_eq!(MotiveType::Naval.roll_modifier(), 0);
        assert_eq!(MotiveType::Wheeled.roll_modifier(), 1);
        assert_eq!(MotiveType::Hover.roll_modifier(), 1);
        assert_eq!(MotiveType::Vtol.roll_modifier(), 2);
        assert_eq!(MotiveType::Wige.roll_modifier(), 2);
    }

    #[test]
    fn labels_map_to_motive_types() {
        assert_eq!(MotiveType::from_movement_label("h"), Some(MotiveType::Hover));
        assert_eq!(MotiveType::from_movement_label("j"), None);
        assert_eq!(MotiveType::from_movement_label(GROUND_MODE), None);
        assert!(is_jump_mode("j"));
        assert!(!is_jump_mode("t"));
    }
}
