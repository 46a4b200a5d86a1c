//! Unit type codes and the rule categories they fall into.

use crate::state::CritKey;

/// Unit type code as printed on a unit card.
///
/// The set is closed; unknown codes fail to parse.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum UnitType {
    #[strum(serialize = "BM")]
    BattleMek,
    #[strum(serialize = "IM")]
    IndustrialMek,
    #[strum(serialize = "PM")]
    ProtoMek,
    #[strum(serialize = "CV")]
    CombatVehicle,
    #[strum(serialize = "SV")]
    SupportVehicle,
    #[strum(serialize = "CI")]
    ConventionalInfantry,
    #[strum(serialize = "BA")]
    BattleArmor,
    #[strum(serialize = "AF")]
    AerospaceFighter,
    #[strum(serialize = "CF")]
    ConventionalFighter,
    #[strum(serialize = "SC")]
    SmallCraft,
    #[strum(serialize = "WS")]
    WarShip,
    #[strum(serialize = "SS")]
    SpaceStation,
    #[strum(serialize = "JS")]
    JumpShip,
    #[strum(serialize = "DA")]
    AerodyneDropShip,
    #[strum(serialize = "DS")]
    SpheroidDropShip,
    #[strum(serialize = "MS")]
    MobileStructure,
    #[strum(serialize = "BD")]
    Building,
}

impl UnitType {
    /// Rule category that decides which critical-hit keys apply.
    pub const fn category(&self) -> UnitCategory {
        use UnitType::*;
        match self {
            BattleMek | IndustrialMek | ProtoMek => UnitCategory::Mek,
            CombatVehicle | SupportVehicle => UnitCategory::Vehicle,
            AerospaceFighter | ConventionalFighter | SmallCraft => UnitCategory::Aerospace,
            WarShip | SpaceStation | JumpShip | AerodyneDropShip | SpheroidDropShip
            | MobileStructure => UnitCategory::LargeVessel,
            ConventionalInfantry | BattleArmor => UnitCategory::Infantry,
            Building => UnitCategory::Structure,
        }
    }

    /// Ground and support vehicles replay motive hits in order.
    pub const fn is_vehicle(&self) -> bool {
        matches!(self.category(), UnitCategory::Vehicle)
    }
}

impl TryFrom<String> for UnitType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UnitType> for String {
    fn from(value: UnitType) -> Self {
        value.as_ref().to_owned()
    }
}

/// Groups unit types that share a critical-hit layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UnitCategory {
    Mek,
    Vehicle,
    Aerospace,
    LargeVessel,
    Infantry,
    Structure,
}

impl UnitCategory {
    /// Maximum number of committed hits for `key`.
    ///
    /// Returns `None` when the key does not exist for this category; callers
    /// treat that as an invalid key.
    pub const fn crit_max(&self, key: CritKey) -> Option<u32> {
        use CritKey::*;
        match (self, key) {
            (Self::Mek, Engine) => Some(2),
            (Self::Mek, FireControl | Mp | Weapons) => Some(4),

            (Self::Vehicle, Engine | Crew | Motive1 | Motive2) => Some(2),
            (Self::Vehicle, FireControl | Weapons) => Some(4),
            (Self::Vehicle, Motive3) => Some(1),

            (Self::Aerospace, Engine | Crew) => Some(2),
            (Self::Aerospace, FireControl | Weapons) => Some(4),

            (Self::LargeVessel, Engine | Crew) => Some(2),
            (Self::LargeVessel, FireControl) => Some(4),
            (Self::LargeVessel, ArcWeapon(..)) => Some(4),

            _ => None,
        }
    }

    /// Returns true if the unit is destroyed once its engine slot is full.
    pub const fn engine_destroys(&self) -> bool {
        matches!(self, Self::Mek | Self::Vehicle | Self::Aerospace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{FiringArc, WeaponColumn};

    #[test]
    fn parses_card_codes() {
        assert_eq!("BM".parse::<UnitType>(), Ok(UnitType::BattleMek));
        assert_eq!("cv".parse::<UnitType>(), Ok(UnitType::CombatVehicle));
        assert!("XX".parse::<UnitType>().is_err());
        assert_eq!(UnitType::IndustrialMek.to_string(), "IM");
    }

    #[test]
    fn categories_cover_every_code() {
        use strum::IntoEnumIterator;
        for unit_type in UnitType::iter() {
            // every code maps somewhere without panicking
            let _ = unit_type.category();
        }
        assert_eq!(UnitType::SupportVehicle.category(), UnitCategory::Vehicle);
        assert_eq!(UnitType::JumpShip.category(), UnitCategory::LargeVessel);
        assert_eq!(UnitType::ConventionalInfantry.category(), UnitCategory::Infantry);
    }

    #[test]
    fn crit_maxima_follow_category() {
        assert_eq!(UnitCategory::Vehicle.crit_max(CritKey::Motive1), Some(2));
        assert_eq!(UnitCategory::Vehicle.crit_max(CritKey::Motive3), Some(1));
        assert_eq!(UnitCategory::Mek.crit_max(CritKey::Motive1), None);
        assert_eq!(UnitCategory::Mek.crit_max(CritKey::Mp), Some(4));
        assert_eq!(UnitCategory::Vehicle.crit_max(CritKey::Mp), None);
        assert_eq!(
            UnitCategory::LargeVessel.crit_max(CritKey::ArcWeapon(FiringArc::Nose, WeaponColumn::Capital)),
            Some(4)
        );
        assert_eq!(UnitCategory::LargeVessel.crit_max(CritKey::Weapons), None);
        assert_eq!(UnitType::MobileStructure.category(), UnitCategory::LargeVessel);
        assert_eq!(
            UnitType::MobileStructure
                .category()
                .crit_max(CritKey::ArcWeapon(FiringArc::Nose, WeaponColumn::Capital)),
            Some(4)
        );
        assert_eq!(UnitType::Building.category().crit_max(CritKey::Engine), None);
        assert_eq!(UnitCategory::Infantry.crit_max(CritKey::Engine), None);
    }
}
