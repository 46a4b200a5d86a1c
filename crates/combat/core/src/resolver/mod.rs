//! Effective combat statistics derived from reference data and combat state.
//!
//! Every value is recomputed on demand from `(UnitReference, CombatState,
//! EvaluationMode)`. Nothing is cached, so there is nothing to invalidate
//! when the pending layer changes.

mod damage;
mod movement;
mod to_hit;

pub use damage::{ARC_COLUMN_HITS, reduce_arc, reduce_arc_damage, reduce_damage, reduce_damage_line};
pub use movement::{
    HEAT_MOVEMENT_PENALTY, IMMOBILE_TMM, MotiveReplay, apply_heat, reduce_mp, reduce_mp_tmm,
};
pub use to_hit::ToHitModifiers;

use crate::config::ResolverConfig;
use crate::pv::adjusted_point_value;
use crate::reference::{
    ArcDamage, ByRange, DamageByRange, MovementModes, RangeBand, UnitCategory, UnitReference,
    UnitType, is_jump_mode,
};
use crate::state::{CombatState, CritKey, EvaluationMode, MAX_HEAT};

/// Read-only view that derives effective stats for one unit.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    reference: &'a UnitReference,
    state: &'a CombatState,
    config: &'a ResolverConfig,
    mode: EvaluationMode,
    skill: u32,
}

impl<'a> Resolver<'a> {
    /// Resolver over the effective state, using the reference skill.
    pub fn new(
        reference: &'a UnitReference,
        state: &'a CombatState,
        config: &'a ResolverConfig,
    ) -> Self {
        Self {
            reference,
            state,
            config,
            mode: EvaluationMode::Effective,
            skill: reference.skill,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the reference skill with a pilot's skill.
    #[must_use]
    pub fn with_skill(mut self, skill: u32) -> Self {
        self.skill = skill;
        self
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn heat(&self) -> u32 {
        self.state.heat(self.mode)
    }

    pub fn crit_count(&self, key: CritKey) -> u32 {
        self.state.crit_count(key, self.mode)
    }

    fn is_vehicle(&self) -> bool {
        self.reference.category() == UnitCategory::Vehicle
    }

    fn motive_replay(&self, inches: u32) -> MotiveReplay {
        let hits = self
            .state
            .crit_sequence(self.mode)
            .into_iter()
            .filter(CritKey::is_motive);
        MotiveReplay::replay(inches, self.reference.tmm, hits)
    }

    /// Movement per mode label after crits and heat.
    pub fn movement(&self) -> MovementModes {
        self.reference
            .movement
            .iter()
            .map(|(label, &inches)| (label.clone(), self.reduce_movement(label, inches)))
            .collect()
    }

    /// Movement for one mode label, or `None` if the unit lacks that mode.
    pub fn movement_for(&self, label: &str) -> Option<u32> {
        self.reference
            .movement
            .get(label)
            .map(|&inches| self.reduce_movement(label, inches))
    }

    fn reduce_movement(&self, label: &str, inches: u32) -> u32 {
        if self.is_vehicle() {
            self.motive_replay(inches).inches
        } else {
            let reduced = reduce_mp(inches, self.crit_count(CritKey::Mp));
            apply_heat(reduced, self.heat(), is_jump_mode(label))
        }
    }

    /// Forced shutdown from heat, or no mode left with any movement.
    pub fn is_immobilized(&self) -> bool {
        if self.heat() >= MAX_HEAT {
            return true;
        }
        if self.is_vehicle() && self.motive_replay(0).immobilized {
            return true;
        }
        self.movement().values().all(|&inches| inches == 0)
    }

    /// Target movement modifier; immobilized units report [`IMMOBILE_TMM`].
    pub fn tmm(&self) -> i32 {
        if self.is_immobilized() {
            return IMMOBILE_TMM;
        }
        let tmm = if self.is_vehicle() {
            self.motive_replay(0).tmm
        } else {
            reduce_mp_tmm(self.reference.tmm, self.crit_count(CritKey::Mp))
        };
        tmm as i32
    }

    pub fn to_hit_modifiers(&self) -> ToHitModifiers {
        ToHitModifiers {
            skill: self.skill,
            heat: self.heat(),
            heat_tolerant: self
                .config
                .is_heat_tolerant(self.reference.specials.iter().map(String::as_str)),
            crew_hits: self.crit_count(CritKey::Crew),
            fire_control_hits: self.crit_count(CritKey::FireControl),
        }
    }

    pub fn to_hit(&self, band: RangeBand) -> u32 {
        self.to_hit_modifiers().target(band)
    }

    pub fn to_hit_by_range(&self) -> ByRange<u32> {
        let modifiers = self.to_hit_modifiers();
        ByRange::default().map(|band, _: u32| modifiers.target(band))
    }

    /// Standard damage line after weapon hits.
    pub fn damage(&self) -> DamageByRange {
        reduce_damage_line(&self.reference.damage, self.crit_count(CritKey::Weapons))
    }

    /// Large-vessel arc damage after per-column hits.
    pub fn arc_damage(&self) -> Vec<ArcDamage> {
        self.reference
            .arcs
            .iter()
            .map(|arc| reduce_arc(arc, |column| self.crit_count(CritKey::ArcWeapon(arc.arc, column))))
            .collect()
    }

    /// Structure gone, or an engine slot full on a unit that dies from it.
    pub fn is_destroyed(&self) -> bool {
        let category = self.reference.category();
        let structure_gone = self.reference.structure > 0
            && self.state.structure_remaining(self.reference, self.mode) == 0;
        let engine_gone = category.engine_destroys()
            && category
                .crit_max(CritKey::Engine)
                .is_some_and(|max| self.crit_count(CritKey::Engine) >= max);
        structure_gone || engine_gone
    }

    /// Extra heat a Mek generates when firing with a damaged engine.
    pub fn engine_heat(&self) -> u32 {
        match self.reference.category() {
            UnitCategory::Mek if self.crit_count(CritKey::Engine) > 0 => 1,
            _ => 0,
        }
    }

    /// Bundles every derived value into one card summary.
    pub fn stats(&self) -> EffectiveStats {
        EffectiveStats {
            name: self.reference.name.clone(),
            unit_type: self.reference.unit_type,
            armor: self.state.armor_remaining(self.reference, self.mode),
            structure: self.state.structure_remaining(self.reference, self.mode),
            heat: self.heat(),
            movement: self.movement(),
            tmm: self.tmm(),
            immobilized: self.is_immobilized(),
            destroyed: self.is_destroyed(),
            to_hit: self.to_hit_by_range(),
            damage: self.damage(),
            arcs: self.arc_damage(),
            engine_heat: self.engine_heat(),
            crits: self.state.crit_sequence(self.mode),
            point_value: u8::try_from(self.skill)
                .ok()
                .and_then(|skill| adjusted_point_value(self.reference.point_value, skill).ok()),
            dirty: self.state.is_dirty(),
        }
    }
}

/// Snapshot of a unit card as it currently plays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    pub name: String,
    pub unit_type: UnitType,
    /// Armor pips remaining.
    pub armor: u32,
    /// Structure pips remaining.
    pub structure: u32,
    pub heat: u32,
    pub movement: MovementModes,
    pub tmm: i32,
    pub immobilized: bool,
    pub destroyed: bool,
    pub to_hit: ByRange<u32>,
    pub damage: DamageByRange,
    pub arcs: Vec<ArcDamage>,
    pub engine_heat: u32,
    pub crits: Vec<CritKey>,
    /// Skill-adjusted point value; `None` for a skill outside the PV table.
    pub point_value: Option<u32>,
    pub dirty: bool,
}
