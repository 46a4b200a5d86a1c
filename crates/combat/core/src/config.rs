use crate::reference::UnitType;

/// Engine-wide options supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub automation: AutomationConfig,
    pub damage_picker: DamagePickerMode,
    pub resolver: ResolverConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Controls the follow-on rolls requested after damage is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutomationConfig {
    pub enabled: bool,
    /// Unit types that never trigger automation.
    pub exempt_types: Vec<UnitType>,
}

impl AutomationConfig {
    pub const DEFAULT_EXEMPT: &'static [UnitType] = &[UnitType::ConventionalInfantry];

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Returns true if damage to a unit of `unit_type` may trigger rolls.
    pub fn applies_to(&self, unit_type: UnitType) -> bool {
        self.enabled && !self.exempt_types.contains(&unit_type)
    }
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exempt_types: Self::DEFAULT_EXEMPT.to_vec(),
        }
    }
}

/// How damage is entered by the caller.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DamagePickerMode {
    /// One amount, spilled from armor into structure.
    #[default]
    Unified,
    /// Armor and structure adjusted independently.
    Split,
}

/// Tunables for derived-stat evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Special tags that soften the heat to-hit penalty by one level.
    pub heat_tolerant_specials: Vec<String>,
}

impl ResolverConfig {
    pub const DEFAULT_HEAT_TOLERANT: &'static [&'static str] = &["RHS"];

    /// Returns true if any special of the unit grants heat tolerance.
    pub fn is_heat_tolerant<'a>(&self, mut specials: impl Iterator<Item = &'a str>) -> bool {
        specials.any(|tag| self.heat_tolerant_specials.iter().any(|t| t == tag))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            heat_tolerant_specials: Self::DEFAULT_HEAT_TOLERANT
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert!(config.automation.enabled);
        assert!(!config.automation.applies_to(UnitType::ConventionalInfantry));
        assert!(config.automation.applies_to(UnitType::BattleMek));
        assert_eq!(config.damage_picker, DamagePickerMode::Unified);
        assert!(config.resolver.is_heat_tolerant(["CASE", "RHS"].into_iter()));
        assert!(!AutomationConfig::disabled().applies_to(UnitType::BattleMek));
    }
}
