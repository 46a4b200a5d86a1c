//! Firing arcs and weapon columns of large vessels.

use super::damage::DamageByRange;

/// Firing arc of a large vessel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FiringArc {
    #[default]
    Nose,
    LeftSide,
    RightSide,
    Aft,
}

/// Weapon column within an arc.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponColumn {
    #[strum(serialize = "std")]
    #[cfg_attr(feature = "serde", serde(rename = "std"))]
    Standard,
    #[strum(serialize = "cap")]
    #[cfg_attr(feature = "serde", serde(rename = "cap"))]
    Capital,
    #[strum(serialize = "scap")]
    #[cfg_attr(feature = "serde", serde(rename = "scap"))]
    SubCapital,
    #[strum(serialize = "msl")]
    #[cfg_attr(feature = "serde", serde(rename = "msl"))]
    Missile,
}

/// Damage lines of one arc, one per weapon column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcDamage {
    pub arc: FiringArc,
    #[cfg_attr(feature = "serde", serde(default))]
    pub standard: DamageByRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capital: DamageByRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_capital: DamageByRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub missile: DamageByRange,
}

impl ArcDamage {
    pub fn column(&self, column: WeaponColumn) -> &DamageByRange {
        match column {
            WeaponColumn::Standard => &self.standard,
            WeaponColumn::Capital => &self.capital,
            WeaponColumn::SubCapital => &self.sub_capital,
            WeaponColumn::Missile => &self.missile,
        }
    }

    pub fn column_mut(&mut self, column: WeaponColumn) -> &mut DamageByRange {
        match column {
            WeaponColumn::Standard => &mut self.standard,
            WeaponColumn::Capital => &mut self.capital,
            WeaponColumn::SubCapital => &mut self.sub_capital,
            WeaponColumn::Missile => &mut self.missile,
        }
    }
}
