//! Damage values and range bands.

use core::fmt;
use core::str::FromStr;

/// A single damage entry on a unit card.
///
/// Cards print either a number, `0*` (a real capability that rounds to
/// nominal zero) or `—` (no capability in that band).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum DamageValue {
    Value(u32),
    /// `0*`
    Minimal,
    /// `—`
    NoCapability,
}

impl DamageValue {
    /// Position in the reduction sequence `... 2 1 0* 0`.
    ///
    /// Returns `None` for [`DamageValue::NoCapability`], which never moves.
    pub const fn position(&self) -> Option<u32> {
        match self {
            Self::Value(0) => Some(0),
            Self::Minimal => Some(1),
            Self::Value(n) => Some(*n + 1),
            Self::NoCapability => None,
        }
    }

    /// Inverse of [`DamageValue::position`].
    pub const fn from_position(position: u32) -> Self {
        match position {
            0 => Self::Value(0),
            1 => Self::Minimal,
            p => Self::Value(p - 1),
        }
    }

    /// Damage actually dealt when this value hits (`0*` deals nothing on its own).
    pub const fn dealt(&self) -> u32 {
        match self {
            Self::Value(n) => *n,
            Self::Minimal | Self::NoCapability => 0,
        }
    }
}

impl Default for DamageValue {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl fmt::Display for DamageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(n) => write!(f, "{n}"),
            Self::Minimal => f.write_str("0*"),
            Self::NoCapability => f.write_str("—"),
        }
    }
}

/// Error returned when a card damage entry cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid damage value '{0}' (expected a number, '0*' or '—')")]
pub struct ParseDamageError(pub String);

impl FromStr for DamageValue {
    type Err = ParseDamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0*" => Ok(Self::Minimal),
            "—" | "-" | "–" => Ok(Self::NoCapability),
            other => other
                .parse::<u32>()
                .map(Self::Value)
                .map_err(|_| ParseDamageError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for DamageValue {
    type Error = ParseDamageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DamageValue> for String {
    fn from(value: DamageValue) -> Self {
        value.to_string()
    }
}

/// Range bands used for damage and to-hit numbers.
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
#[strum(ascii_case_insensitive)]
pub enum RangeBand {
    #[strum(serialize = "S")]
    Short,
    #[strum(serialize = "M")]
    Medium,
    #[strum(serialize = "L")]
    Long,
    #[strum(serialize = "E")]
    Extreme,
}

impl RangeBand {
    /// To-hit offset added for attacks in this band.
    pub const fn to_hit_offset(&self) -> u32 {
        match self {
            Self::Short => 0,
            Self::Medium => 2,
            Self::Long => 4,
            Self::Extreme => 6,
        }
    }
}

/// One value per range band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByRange<T> {
    pub short: T,
    pub medium: T,
    pub long: T,
    pub extreme: T,
}

impl<T: Copy> ByRange<T> {
    pub const fn new(short: T, medium: T, long: T, extreme: T) -> Self {
        Self {
            short,
            medium,
            long,
            extreme,
        }
    }

    pub const fn get(&self, band: RangeBand) -> T {
        match band {
            RangeBand::Short => self.short,
            RangeBand::Medium => self.medium,
            RangeBand::Long => self.long,
            RangeBand::Extreme => self.extreme,
        }
    }

    /// Applies `f` to every band independently.
    pub fn map<U>(&self, mut f: impl FnMut(RangeBand, T) -> U) -> ByRange<U> {
        ByRange {
            short: f(RangeBand::Short, self.short),
            medium: f(RangeBand::Medium, self.medium),
            long: f(RangeBand::Long, self.long),
            extreme: f(RangeBand::Extreme, self.extreme),
        }
    }
}

/// Card damage line, e.g. `3/3/2/—`.
pub type DamageByRange = ByRange<DamageValue>;

impl DamageByRange {
    /// Builds a damage line from card notation, one entry per band.
    pub fn parse(short: &str, medium: &str, long: &str, extreme: &str) -> Result<Self, ParseDamageError> {
        Ok(Self::new(
            short.parse()?,
            medium.parse()?,
            long.parse()?,
            extreme.parse()?,
        ))
    }
}

impl fmt::Display for DamageByRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.short, self.medium, self.long, self.extreme)
    }
}
