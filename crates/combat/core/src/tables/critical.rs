use crate::reference::{UnitCategory, UnitReference};
use crate::state::CritKey;

/// Result of a critical-hit table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CritOutcome {
    NoEffect,
    Hit(CritKey),
    /// Ammunition hit; see [`resolve_ammo_hit`].
    AmmoHit,
    Destroyed,
}

/// How an ammunition hit plays out for a given unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmmoResolution {
    /// Unit carries no explosive ammunition (`ENE`) or full protection (`CASEII`).
    Negated,
    /// `CASE` vents the explosion into extra damage.
    ExtraDamage(u32),
    Destroyed,
}

/// Looks up a 2d6 total on the critical-hit table of `category`.
///
/// Returns `None` for categories without an automated table; those rolls
/// are resolved by hand.
pub const fn critical_outcome(category: UnitCategory, total: u32) -> Option<CritOutcome> {
    use CritOutcome::*;
    let outcome = match category {
        UnitCategory::Mek => match total {
            2 => AmmoHit,
            3 | 11 => Hit(CritKey::Engine),
            4 | 10 => Hit(CritKey::FireControl),
            6 | 8 => Hit(CritKey::Weapons),
            7 => Hit(CritKey::Mp),
            12 => Destroyed,
            _ => NoEffect,
        },
        UnitCategory::Vehicle => match total {
            2 => AmmoHit,
            3 | 11 => Hit(CritKey::Crew),
            4 | 5 => Hit(CritKey::FireControl),
            9 | 10 => Hit(CritKey::Weapons),
            12 => Hit(CritKey::Engine),
            _ => NoEffect,
        },
        _ => return None,
    };
    Some(outcome)
}

pub fn resolve_ammo_hit(reference: &UnitReference) -> AmmoResolution {
    if reference.has_special("ENE") || reference.has_special("CASEII") {
        AmmoResolution::Negated
    } else if reference.has_special("CASE") {
        AmmoResolution::ExtraDamage(1)
    } else {
        AmmoResolution::Destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::UnitType;

    #[test]
    fn mek_table() {
        let mek = UnitCategory::Mek;
        assert_eq!(critical_outcome(mek, 2), Some(CritOutcome::AmmoHit));
        assert_eq!(critical_outcome(mek, 3), Some(CritOutcome::Hit(CritKey::Engine)));
        assert_eq!(critical_outcome(mek, 5), Some(CritOutcome::NoEffect));
        assert_eq!(critical_outcome(mek, 7), Some(CritOutcome::Hit(CritKey::Mp)));
        assert_eq!(critical_outcome(mek, 9), Some(CritOutcome::NoEffect));
        assert_eq!(critical_outcome(mek, 12), Some(CritOutcome::Destroyed));
    }

    #[test]
    fn vehicle_table() {
        let vehicle = UnitCategory::Vehicle;
        assert_eq!(critical_outcome(vehicle, 3), Some(CritOutcome::Hit(CritKey::Crew)));
        assert_eq!(critical_outcome(vehicle, 7), Some(CritOutcome::NoEffect));
        assert_eq!(critical_outcome(vehicle, 10), Some(CritOutcome::Hit(CritKey::Weapons)));
        assert_eq!(critical_outcome(vehicle, 12), Some(CritOutcome::Hit(CritKey::Engine)));
    }

    #[test]
    fn other_categories_are_manual() {
        assert_eq!(critical_outcome(UnitCategory::Aerospace, 7), None);
        assert_eq!(critical_outcome(UnitCategory::LargeVessel, 12), None);
    }

    #[test]
    fn ammo_protection() {
        let bare = UnitReference::new("Mek", UnitType::BattleMek);
        assert_eq!(resolve_ammo_hit(&bare), AmmoResolution::Destroyed);
        let case = bare.clone().with_special("CASE");
        assert_eq!(resolve_ammo_hit(&case), AmmoResolution::ExtraDamage(1));
        let case2 = bare.clone().with_special("CASEII");
        assert_eq!(resolve_ammo_hit(&case2), AmmoResolution::Negated);
        let energy = bare.with_special("ENE");
        assert_eq!(resolve_ammo_hit(&energy), AmmoResolution::Negated);
    }
}
