//! Per-unit combat record with a pending delta layer.
//!
//! A [`CombatState`] holds two layers:
//!
//! ```text
//! [ Committed ]  confirmed damage, heat, crits and ability usage
//!      ⊕
//! [ Pending ]    signed deltas the user is previewing
//! ```
//!
//! ## Principles
//!
//! 1. **Writes never validate**: pending mutations only accumulate; the
//!    caller constrains what it asks for
//! 2. **Reads clamp**: effective accessors clamp to `[0, max]` for display
//! 3. **Commit is atomic**: [`CombatState::commit_pending`] validates every
//!    pending field first and either folds all of them or none
//! 4. **Single writer**: mutation takes `&mut self`; one owner per unit

mod abilities;
mod crits;
mod error;
mod fields;

pub use abilities::{AbilityLedger, AbilityUsage, PendingAbilities, PendingAbility};
pub use crits::{CritEntry, CritKey, CriticalHitRecord, ParseCritKeyError, PendingCrits};
pub use error::{Quantity, StateError};
pub use fields::PendingFields;

use crate::reference::{UnitReference, UnitType};

/// Heat level at which a unit shuts down; also the highest trackable level.
pub const MAX_HEAT: u32 = 4;

/// Which layers a read accessor sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationMode {
    /// Committed state only.
    Committed,
    /// Committed ⊕ pending, used for live previews.
    #[default]
    Effective,
}

/// How a lump of incoming damage was split between armor and structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageSplit {
    pub armor: u32,
    pub structure: u32,
}

/// What a successful commit folded into committed state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitReceipt {
    pub armor_delta: i32,
    pub structure_delta: i32,
    pub heat_delta: i32,
    /// Committed structure damage before this commit.
    pub structure_damage_before: u32,
    /// Committed structure damage after this commit.
    pub structure_damage_after: u32,
    /// Crit keys appended, in commit order.
    pub crits_added: Vec<CritKey>,
    /// Crit keys repaired (most recent entries removed first).
    pub crits_removed: Vec<CritKey>,
}

impl CommitReceipt {
    /// Net damage applied by the commit (negative for repairs).
    pub fn damage_applied(&self) -> i32 {
        self.armor_delta + self.structure_delta
    }

    pub fn is_empty(&self) -> bool {
        self.armor_delta == 0
            && self.structure_delta == 0
            && self.heat_delta == 0
            && self.crits_added.is_empty()
            && self.crits_removed.is_empty()
    }
}

/// Mutable combat record of one unit in a force.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    unit_type: UnitType,

    armor_damage: u32,
    structure_damage: u32,
    heat: u32,
    crits: CriticalHitRecord,
    abilities: AbilityLedger,

    pending_armor: i32,
    pending_structure: i32,
    pending_heat: i32,
    pending_crits: PendingCrits,
    pending_abilities: PendingAbilities,
}

impl CombatState {
    /// Creates an undamaged record for a unit of the given type.
    pub fn new(unit_type: UnitType) -> Self {
        Self {
            unit_type,
            armor_damage: 0,
            structure_damage: 0,
            heat: 0,
            crits: CriticalHitRecord::new(),
            abilities: AbilityLedger::new(),
            pending_armor: 0,
            pending_structure: 0,
            pending_heat: 0,
            pending_crits: PendingCrits::default(),
            pending_abilities: PendingAbilities::new(),
        }
    }

    /// Creates an undamaged record for `reference`.
    pub fn for_unit(reference: &UnitReference) -> Self {
        Self::new(reference.unit_type)
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    // ===== pending mutations =====

    pub fn apply_pending_armor(&mut self, delta: i32) {
        self.pending_armor += delta;
    }

    pub fn set_pending_armor(&mut self, value: i32) {
        self.pending_armor = value;
    }

    pub fn apply_pending_structure(&mut self, delta: i32) {
        self.pending_structure += delta;
    }

    pub fn set_pending_structure(&mut self, value: i32) {
        self.pending_structure = value;
    }

    pub fn apply_pending_heat(&mut self, delta: i32) {
        self.pending_heat += delta;
    }

    pub fn set_pending_heat(&mut self, value: i32) {
        self.pending_heat = value;
    }

    /// Accumulates a pending critical-hit delta.
    ///
    /// Fails with [`StateError::InvalidKey`] when the key does not exist for
    /// this unit type; nothing is recorded in that case.
    pub fn apply_pending_crit(&mut self, key: CritKey, delta: i32) -> Result<(), StateError> {
        self.check_key(key)?;
        self.pending_crits.add(key, delta);
        Ok(())
    }

    /// Overwrites the pending critical-hit delta for `key`.
    pub fn set_pending_crit(&mut self, key: CritKey, delta: i32) -> Result<(), StateError> {
        self.check_key(key)?;
        self.pending_crits.set(key, delta);
        Ok(())
    }

    /// Marks one more use of a consumable ability.
    pub fn apply_pending_ability_consume(&mut self, key: &str) {
        self.update_pending_ability(key, |pending, _| pending.consumed += 1);
    }

    /// Undoes one use, or un-exhausts an exhausted ability.
    pub fn apply_pending_ability_restore(&mut self, key: &str) {
        self.update_pending_ability(key, |pending, committed| {
            let exhausted = pending.exhausted.unwrap_or(committed.exhausted);
            if exhausted {
                pending.exhausted = committed.exhausted.then_some(false);
            } else {
                pending.consumed -= 1;
            }
        });
    }

    /// Marks an exhaustible ability as spent.
    pub fn apply_pending_ability_exhaust(&mut self, key: &str) {
        self.update_pending_ability(key, |pending, committed| {
            pending.exhausted = (!committed.exhausted).then_some(true);
        });
    }

    /// Queues `amount` damage against armor first, overflowing into structure.
    ///
    /// Remaining armor is read from the effective (committed ⊕ pending)
    /// state, so repeated calls keep stacking correctly.
    pub fn queue_damage(&mut self, reference: &UnitReference, amount: u32) -> DamageSplit {
        let armor_left = self.armor_remaining(reference, EvaluationMode::Effective);
        let armor = amount.min(armor_left);
        let structure = amount - armor;

        self.pending_armor = self.pending_armor.saturating_add(saturating_i32(armor));
        self.pending_structure = self
            .pending_structure
            .saturating_add(saturating_i32(structure));

        DamageSplit { armor, structure }
    }

    // ===== transaction control =====

    /// Which pending fields are non-zero.
    pub fn pending_fields(&self) -> PendingFields {
        let mut fields = PendingFields::empty();

        if self.pending_armor != 0 {
            fields |= PendingFields::ARMOR;
        }
        if self.pending_structure != 0 {
            fields |= PendingFields::STRUCTURE;
        }
        if self.pending_heat != 0 {
            fields |= PendingFields::HEAT;
        }
        if !self.pending_crits.is_empty() {
            fields |= PendingFields::CRITS;
        }
        if self.pending_abilities.values().any(|p| !p.is_empty()) {
            fields |= PendingFields::ABILITIES;
        }

        fields
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending_fields().is_empty()
    }

    /// Drops every pending change; committed state is untouched.
    pub fn discard_pending(&mut self) {
        self.pending_armor = 0;
        self.pending_structure = 0;
        self.pending_heat = 0;
        self.pending_crits.clear();
        self.pending_abilities.clear();
    }

    /// Folds the pending layer into committed state.
    ///
    /// Every pending field is validated against `reference` before anything
    /// changes. On error the record is left exactly as it was, pending layer
    /// included, so the caller can correct and retry.
    pub fn commit_pending(&mut self, reference: &UnitReference) -> Result<CommitReceipt, StateError> {
        let armor = checked_total(self.armor_damage, self.pending_armor, reference.armor, Quantity::Armor)?;
        let structure = checked_total(
            self.structure_damage,
            self.pending_structure,
            reference.structure,
            Quantity::Structure,
        )?;
        let heat = checked_total(self.heat, self.pending_heat, MAX_HEAT, Quantity::Heat)?;

        for key in self.pending_crits.keys() {
            let max = self.check_key(key)?;
            checked_total(
                self.crits.count(key),
                self.pending_crits.get(key),
                max,
                Quantity::Crit(key),
            )?;
        }

        for (key, pending) in &self.pending_abilities {
            let capacity = reference
                .ability_capacity(key)
                .ok_or_else(|| StateError::UnknownAbility { key: key.clone() })?;
            let committed = self.abilities.get(key).copied().unwrap_or_default();
            checked_total(
                committed.consumed,
                pending.consumed,
                capacity,
                Quantity::Ability(key.clone()),
            )?;
        }

        // Validation passed: fold everything
        let mut receipt = CommitReceipt {
            armor_delta: self.pending_armor,
            structure_delta: self.pending_structure,
            heat_delta: self.pending_heat,
            structure_damage_before: self.structure_damage,
            structure_damage_after: structure,
            ..CommitReceipt::default()
        };

        self.armor_damage = armor;
        self.structure_damage = structure;
        self.heat = heat;

        for (key, count) in self.pending_crits.repairs() {
            for _ in 0..count {
                if self.crits.remove_latest(key) {
                    receipt.crits_removed.push(key);
                }
            }
        }
        for &key in self.pending_crits.hits() {
            self.crits.push(key);
            receipt.crits_added.push(key);
        }

        for (key, pending) in &self.pending_abilities {
            let usage = self.abilities.entry(key.clone()).or_default();
            usage.consumed = usage.consumed.saturating_add_signed(pending.consumed);
            if let Some(exhausted) = pending.exhausted {
                usage.exhausted = exhausted;
            }
        }

        self.discard_pending();
        Ok(receipt)
    }

    // ===== read accessors =====

    /// Consumed armor pips, clamped to `[0, reference.armor]`.
    pub fn armor_damage(&self, reference: &UnitReference, mode: EvaluationMode) -> u32 {
        clamped_total(self.armor_damage, self.pending(mode, self.pending_armor), reference.armor)
    }

    pub fn armor_remaining(&self, reference: &UnitReference, mode: EvaluationMode) -> u32 {
        reference.armor - self.armor_damage(reference, mode)
    }

    /// Consumed structure pips, clamped to `[0, reference.structure]`.
    pub fn structure_damage(&self, reference: &UnitReference, mode: EvaluationMode) -> u32 {
        clamped_total(
            self.structure_damage,
            self.pending(mode, self.pending_structure),
            reference.structure,
        )
    }

    pub fn structure_remaining(&self, reference: &UnitReference, mode: EvaluationMode) -> u32 {
        reference.structure - self.structure_damage(reference, mode)
    }

    /// Heat level, clamped to `[0, MAX_HEAT]`.
    pub fn heat(&self, mode: EvaluationMode) -> u32 {
        clamped_total(self.heat, self.pending(mode, self.pending_heat), MAX_HEAT)
    }

    /// Hits on `key`, clamped to `[0, max]` for this unit type.
    pub fn crit_count(&self, key: CritKey, mode: EvaluationMode) -> u32 {
        let max = self.unit_type.category().crit_max(key).unwrap_or(0);
        clamped_total(self.crits.count(key), self.pending(mode, self.pending_crits.get(key)), max)
    }

    /// Critical hits in the order they were (or would be) committed.
    ///
    /// In effective mode pending repairs remove the most recent hits and
    /// pending hits are appended in call order, capped at each key's maximum.
    pub fn crit_sequence(&self, mode: EvaluationMode) -> Vec<CritKey> {
        let mut sequence: Vec<CritKey> = self.crits.keys().collect();
        if mode == EvaluationMode::Committed {
            return sequence;
        }

        for (key, count) in self.pending_crits.repairs() {
            for _ in 0..count {
                if let Some(index) = sequence.iter().rposition(|k| *k == key) {
                    sequence.remove(index);
                }
            }
        }
        let category = self.unit_type.category();
        for &key in self.pending_crits.hits() {
            let max = category.crit_max(key).unwrap_or(0);
            let count = sequence.iter().filter(|k| **k == key).count() as u32;
            if count < max {
                sequence.push(key);
            }
        }
        sequence
    }

    /// Usage of an ability, consumed count floored at zero.
    pub fn ability_usage(&self, key: &str, mode: EvaluationMode) -> AbilityUsage {
        let committed = self.abilities.get(key).copied().unwrap_or_default();
        match (mode, self.pending_abilities.get(key)) {
            (EvaluationMode::Effective, Some(pending)) => AbilityUsage {
                consumed: committed.consumed.saturating_add_signed(pending.consumed),
                exhausted: pending.exhausted.unwrap_or(committed.exhausted),
            },
            _ => committed,
        }
    }

    pub fn crits(&self) -> &CriticalHitRecord {
        &self.crits
    }

    pub fn abilities(&self) -> &AbilityLedger {
        &self.abilities
    }

    pub fn pending_crits(&self) -> &PendingCrits {
        &self.pending_crits
    }

    pub fn pending_armor(&self) -> i32 {
        self.pending_armor
    }

    pub fn pending_structure(&self) -> i32 {
        self.pending_structure
    }

    pub fn pending_heat(&self) -> i32 {
        self.pending_heat
    }

    // ===== helpers =====

    fn pending(&self, mode: EvaluationMode, value: i32) -> i32 {
        match mode {
            EvaluationMode::Committed => 0,
            EvaluationMode::Effective => value,
        }
    }

    fn check_key(&self, key: CritKey) -> Result<u32, StateError> {
        self.unit_type
            .category()
            .crit_max(key)
            .ok_or(StateError::InvalidKey {
                key,
                unit_type: self.unit_type,
            })
    }

    fn update_pending_ability(
        &mut self,
        key: &str,
        update: impl FnOnce(&mut PendingAbility, &AbilityUsage),
    ) {
        let committed = self.abilities.get(key).copied().unwrap_or_default();
        let pending = self.pending_abilities.entry(key.to_owned()).or_default();
        update(pending, &committed);
        if pending.is_empty() {
            self.pending_abilities.remove(key);
        }
    }
}

fn checked_total(committed: u32, pending: i32, max: u32, quantity: Quantity) -> Result<u32, StateError> {
    let value = i64::from(committed) + i64::from(pending);
    if value < 0 || value > i64::from(max) {
        return Err(StateError::OutOfRange {
            quantity,
            value,
            max,
        });
    }
    Ok(value as u32)
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn clamped_total(committed: u32, pending: i32, max: u32) -> u32 {
    (i64::from(committed) + i64::from(pending)).clamp(0, i64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, ErrorSeverity};
    use crate::reference::GROUND_MODE;

    fn mek() -> UnitReference {
        UnitReference::new("Griffin", UnitType::BattleMek)
            .with_armor(5, 4)
            .with_movement(GROUND_MODE, 10)
            .with_special("BOMB2")
            .with_special("ECM")
    }

    #[test]
    fn dirty_tracks_pending_fields() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        assert!(!state.is_dirty());

        state.apply_pending_armor(2);
        state.apply_pending_heat(1);
        assert_eq!(state.pending_fields(), PendingFields::ARMOR | PendingFields::HEAT);

        state.apply_pending_armor(-2);
        assert_eq!(state.pending_fields(), PendingFields::HEAT);

        state.commit_pending(&unit).unwrap();
        assert!(!state.is_dirty());
    }

    #[test]
    fn effective_reads_include_pending_and_clamp() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_armor(3);
        assert_eq!(state.armor_remaining(&unit, EvaluationMode::Committed), 5);
        assert_eq!(state.armor_remaining(&unit, EvaluationMode::Effective), 2);

        state.apply_pending_armor(10);
        assert_eq!(state.armor_remaining(&unit, EvaluationMode::Effective), 0);

        state.set_pending_heat(-3);
        assert_eq!(state.heat(EvaluationMode::Effective), 0);
    }

    #[test]
    fn commit_out_of_range_is_rejected_atomically() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_armor(2);
        state.apply_pending_structure(7);
        let before = state.clone();

        let err = state.commit_pending(&unit).unwrap_err();
        assert!(matches!(
            err,
            StateError::OutOfRange {
                quantity: Quantity::Structure,
                value: 7,
                max: 4
            }
        ));
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(state, before);
        assert!(state.is_dirty());

        state.set_pending_structure(4);
        let receipt = state.commit_pending(&unit).unwrap();
        assert_eq!(receipt.damage_applied(), 6);
        assert_eq!(state.structure_remaining(&unit, EvaluationMode::Committed), 0);
    }

    #[test]
    fn commit_then_discard_is_noop() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_armor(1);
        state.apply_pending_crit(CritKey::Mp, 1).unwrap();
        state.commit_pending(&unit).unwrap();

        let committed = state.clone();
        state.discard_pending();
        assert_eq!(state, committed);
    }

    #[test]
    fn discard_leaves_committed_state() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_armor(1);
        state.commit_pending(&unit).unwrap();

        state.apply_pending_armor(2);
        state.apply_pending_crit(CritKey::Weapons, 1).unwrap();
        state.apply_pending_ability_consume("BOMB");
        state.discard_pending();

        assert!(!state.is_dirty());
        assert_eq!(state.armor_damage(&unit, EvaluationMode::Effective), 1);
        assert_eq!(state.crit_count(CritKey::Weapons, EvaluationMode::Effective), 0);
    }

    #[test]
    fn crits_commit_in_call_order() {
        let unit = UnitReference::new("Hover", UnitType::CombatVehicle).with_armor(3, 2);
        let mut state = CombatState::for_unit(&unit);

        state.apply_pending_crit(CritKey::Motive2, 1).unwrap();
        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        let receipt = state.commit_pending(&unit).unwrap();
        assert_eq!(receipt.crits_added, vec![CritKey::Motive2, CritKey::Motive1]);

        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        state.commit_pending(&unit).unwrap();
        assert_eq!(
            state.crits().keys().collect::<Vec<_>>(),
            vec![CritKey::Motive2, CritKey::Motive1, CritKey::Motive1]
        );
    }

    #[test]
    fn interleaved_hits_commit_in_call_order() {
        let unit = UnitReference::new("Hover", UnitType::CombatVehicle)
            .with_armor(3, 2)
            .with_movement("h", 10);
        let mut state = CombatState::for_unit(&unit);

        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        state.apply_pending_crit(CritKey::Motive2, 1).unwrap();
        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        assert_eq!(
            state.crit_sequence(EvaluationMode::Effective),
            vec![CritKey::Motive1, CritKey::Motive2, CritKey::Motive1]
        );

        let receipt = state.commit_pending(&unit).unwrap();
        assert_eq!(
            receipt.crits_added,
            vec![CritKey::Motive1, CritKey::Motive2, CritKey::Motive1]
        );
        assert_eq!(
            state.crits().keys().collect::<Vec<_>>(),
            vec![CritKey::Motive1, CritKey::Motive2, CritKey::Motive1]
        );
    }

    #[test]
    fn huge_damage_saturates_instead_of_wrapping() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        let split = state.queue_damage(&unit, u32::MAX);

        assert_eq!(split.armor, unit.armor);
        assert!(state.pending_structure() > 0);
        assert_eq!(state.pending_structure(), i32::MAX);
        assert_eq!(
            state.structure_remaining(&unit, EvaluationMode::Effective),
            0
        );
        assert!(matches!(
            state.commit_pending(&unit),
            Err(StateError::OutOfRange {
                quantity: Quantity::Structure,
                ..
            })
        ));
    }

    #[test]
    fn crit_over_cap_is_rejected() {
        let unit = UnitReference::new("Tank", UnitType::CombatVehicle).with_armor(3, 2);
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_crit(CritKey::Motive3, 2).unwrap();

        assert!(matches!(
            state.commit_pending(&unit),
            Err(StateError::OutOfRange {
                quantity: Quantity::Crit(CritKey::Motive3),
                ..
            })
        ));
        // Effective reads clamp to the cap
        assert_eq!(state.crit_count(CritKey::Motive3, EvaluationMode::Effective), 1);
        assert_eq!(state.crit_sequence(EvaluationMode::Effective), vec![CritKey::Motive3]);
    }

    #[test]
    fn invalid_key_is_a_hard_failure() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        let err = state.apply_pending_crit(CritKey::Motive1, 1).unwrap_err();

        assert_eq!(err.error_code(), "STATE_INVALID_KEY");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(!state.is_dirty());
    }

    #[test]
    fn crit_repair_removes_latest_entry() {
        let unit = UnitReference::new("Tank", UnitType::CombatVehicle).with_armor(3, 2);
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        state.apply_pending_crit(CritKey::Motive2, 1).unwrap();
        state.apply_pending_crit(CritKey::Motive1, 1).unwrap();
        state.commit_pending(&unit).unwrap();

        state.apply_pending_crit(CritKey::Motive1, -1).unwrap();
        assert_eq!(
            state.crit_sequence(EvaluationMode::Effective),
            vec![CritKey::Motive1, CritKey::Motive2]
        );
        let receipt = state.commit_pending(&unit).unwrap();
        assert_eq!(receipt.crits_removed, vec![CritKey::Motive1]);
    }

    #[test]
    fn abilities_consume_restore_and_exhaust() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);

        state.apply_pending_ability_consume("BOMB");
        state.apply_pending_ability_consume("BOMB");
        state.apply_pending_ability_exhaust("ECM");
        assert!(state.pending_fields().contains(PendingFields::ABILITIES));
        state.commit_pending(&unit).unwrap();

        assert_eq!(state.ability_usage("BOMB", EvaluationMode::Committed).consumed, 2);
        assert!(state.ability_usage("ECM", EvaluationMode::Committed).exhausted);

        // third bomb exceeds capacity
        state.apply_pending_ability_consume("BOMB");
        assert!(matches!(
            state.commit_pending(&unit),
            Err(StateError::OutOfRange { .. })
        ));
        state.discard_pending();

        state.apply_pending_ability_restore("ECM");
        state.apply_pending_ability_restore("BOMB");
        assert!(!state.ability_usage("ECM", EvaluationMode::Effective).exhausted);
        assert_eq!(state.ability_usage("BOMB", EvaluationMode::Effective).consumed, 1);
        state.commit_pending(&unit).unwrap();
        assert!(!state.ability_usage("ECM", EvaluationMode::Committed).exhausted);
    }

    #[test]
    fn exhaust_then_restore_cancels_out() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_ability_exhaust("ECM");
        state.apply_pending_ability_restore("ECM");
        assert!(!state.is_dirty());
    }

    #[test]
    fn unknown_ability_fails_commit() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_ability_consume("TAG");
        let err = state.commit_pending(&unit).unwrap_err();
        assert_eq!(err, StateError::UnknownAbility { key: "TAG".into() });
    }

    #[test]
    fn queue_damage_fills_armor_first() {
        let unit = mek();
        let mut state = CombatState::for_unit(&unit);

        assert_eq!(state.queue_damage(&unit, 3), DamageSplit { armor: 3, structure: 0 });
        assert_eq!(state.queue_damage(&unit, 4), DamageSplit { armor: 2, structure: 2 });
        assert_eq!(state.pending_armor(), 5);
        assert_eq!(state.pending_structure(), 2);
    }
}
