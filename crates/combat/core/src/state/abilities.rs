//! Usage tracking for consumable and exhaustible special abilities.

use std::collections::BTreeMap;

/// Committed usage of one ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityUsage {
    /// Uses consumed so far.
    pub consumed: u32,
    /// Exhaustible abilities are either available or spent.
    pub exhausted: bool,
}

/// Pending change to one ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingAbility {
    pub consumed: i32,
    /// `Some(flag)` when the exhausted flag is about to change.
    pub exhausted: Option<bool>,
}

impl PendingAbility {
    pub const fn is_empty(&self) -> bool {
        self.consumed == 0 && self.exhausted.is_none()
    }
}

/// Committed usage per ability key.
pub type AbilityLedger = BTreeMap<String, AbilityUsage>;

/// Pending deltas per ability key.
pub type PendingAbilities = BTreeMap<String, PendingAbility>;
