//! Immutable reference data for a unit (the printed stat block).
//!
//! Reference data is loaded by an external collaborator and never mutated by
//! the engine. Everything that changes during play lives in
//! [`CombatState`](crate::state::CombatState).

mod arc;
mod damage;
mod movement;
mod unit_type;

pub use arc::{ArcDamage, FiringArc, WeaponColumn};
pub use damage::{ByRange, DamageByRange, DamageValue, ParseDamageError, RangeBand};
pub use movement::{GROUND_MODE, JUMP_MODE, MotiveType, MovementModes, is_jump_mode};
pub use unit_type::{UnitCategory, UnitType};

/// Stat block of a single unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitReference {
    pub name: String,
    pub unit_type: UnitType,
    /// Armor pips.
    pub armor: u32,
    /// Structure pips.
    pub structure: u32,
    /// Base movement per mode label, in inches.
    pub movement: MovementModes,
    pub damage: DamageByRange,
    /// Per-arc damage, large vessels only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub arcs: Vec<ArcDamage>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub specials: Vec<String>,
    /// Base target movement modifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tmm: u32,
    /// Baseline to-hit skill used when no pilot skill is supplied.
    #[cfg_attr(feature = "serde", serde(default = "default_skill"))]
    pub skill: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub point_value: u32,
    /// Explicit motive type; derived from the movement labels when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub motive: Option<MotiveType>,
}

#[cfg(feature = "serde")]
fn default_skill() -> u32 {
    UnitReference::DEFAULT_SKILL
}

impl UnitReference {
    pub const DEFAULT_SKILL: u32 = 4;

    /// Creates an empty stat block of the given type.
    pub fn new(name: impl Into<String>, unit_type: UnitType) -> Self {
        Self {
            name: name.into(),
            unit_type,
            armor: 0,
            structure: 0,
            movement: MovementModes::new(),
            damage: DamageByRange::default(),
            arcs: Vec::new(),
            specials: Vec::new(),
            tmm: 0,
            skill: Self::DEFAULT_SKILL,
            point_value: 0,
            motive: None,
        }
    }

    #[must_use]
    pub fn with_armor(mut self, armor: u32, structure: u32) -> Self {
        self.armor = armor;
        self.structure = structure;
        self
    }

    #[must_use]
    pub fn with_movement(mut self, label: impl Into<String>, inches: u32) -> Self {
        self.movement.insert(label.into(), inches);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: DamageByRange) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcDamage) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_special(mut self, tag: impl Into<String>) -> Self {
        self.specials.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_tmm(mut self, tmm: u32) -> Self {
        self.tmm = tmm;
        self
    }

    #[must_use]
    pub fn with_point_value(mut self, point_value: u32) -> Self {
        self.point_value = point_value;
        self
    }

    #[must_use]
    pub fn with_motive(mut self, motive: MotiveType) -> Self {
        self.motive = Some(motive);
        self
    }

    pub fn category(&self) -> UnitCategory {
        self.unit_type.category()
    }

    /// Returns true if any special tag equals `tag`.
    pub fn has_special(&self, tag: &str) -> bool {
        self.specials.iter().any(|s| s == tag)
    }

    /// Returns true if any special tag starts with `prefix`.
    pub fn has_special_prefix(&self, prefix: &str) -> bool {
        self.specials.iter().any(|s| s.starts_with(prefix))
    }

    /// Use capacity of an ability carried as a special tag.
    ///
    /// `BOMB4` has capacity 4 under key `BOMB`; a tag without a numeric
    /// suffix (e.g. `ECM`) is exhaustible and has capacity 1. Returns `None`
    /// when the unit does not carry the ability.
    pub fn ability_capacity(&self, key: &str) -> Option<u32> {
        self.specials.iter().find_map(|tag| {
            let rest = tag.strip_prefix(key)?;
            if rest.is_empty() {
                Some(1)
            } else if rest.bytes().all(|b| b.is_ascii_digit()) {
                rest.parse().ok()
            } else {
                None
            }
        })
    }

    /// Motive type of a vehicle, explicit or derived from movement labels.
    pub fn motive_type(&self) -> Option<MotiveType> {
        self.motive.or_else(|| {
            self.movement
                .keys()
                .find_map(|label| MotiveType::from_movement_label(label))
        })
    }
}
