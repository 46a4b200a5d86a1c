//! End-to-end damage automation scenarios driven through the public API.

use std::path::PathBuf;

use combat_content::ContentFactory;
use combat_core::{
    AmmoResolution, CombatState, CritKey, DiceRoll, EngineConfig, EvaluationMode, GROUND_MODE,
    Resolver, UnitReference, UnitType,
};
use runtime::{
    AutomationError, DamageAutomation, DamageTrigger, FixedDice, MAX_CHAIN_DEPTH, RandomDice,
    RollEffect, RollKind, StepOutcome,
};

fn commit_damage(unit: &UnitReference, state: &mut CombatState, amount: u32) -> DamageTrigger {
    state.queue_damage(unit, amount);
    let receipt = state.commit_pending(unit).expect("damage within bounds");
    DamageTrigger::from_receipt(&receipt)
}

fn mek(name: &str, unit_type: UnitType) -> UnitReference {
    UnitReference::new(name, unit_type)
        .with_armor(3, 4)
        .with_movement(GROUND_MODE, 10)
}

fn hover() -> UnitReference {
    UnitReference::new("Saracen", UnitType::CombatVehicle)
        .with_armor(3, 3)
        .with_movement("h", 16)
        .with_tmm(3)
}

#[test]
fn structure_hit_owes_one_roll_and_two_for_industrial() {
    for (unit_type, expected) in [(UnitType::BattleMek, 1), (UnitType::IndustrialMek, 2)] {
        let unit = UnitReference::new("Card", unit_type).with_armor(0, 4);
        let mut state = CombatState::for_unit(&unit);
        state.apply_pending_structure(2);
        state.commit_pending(&unit).unwrap();

        state.apply_pending_structure(2);
        let receipt = state.commit_pending(&unit).unwrap();
        assert_eq!(state.structure_damage(&unit, EvaluationMode::Committed), 4);

        let automation = DamageAutomation::new(EngineConfig::default());
        let requests = automation.requests(&unit, &state, &DamageTrigger::from_receipt(&receipt));
        assert_eq!(requests.len(), expected, "{unit_type}");
        assert!(requests.iter().all(|r| r.kind == RollKind::CriticalHit));
    }
}

#[test]
fn destroyed_unit_skips_remaining_rolls() {
    let unit = UnitReference::new("Card", UnitType::BattleMek).with_armor(0, 4);
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(EngineConfig::default());
    let mut dice = FixedDice::default();
    let report = automation.run(&unit, &mut state, &trigger, &mut dice).unwrap();

    assert!(report.steps.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn vehicle_takes_structure_and_motive_rolls_in_order() {
    let unit = hover();
    let config = EngineConfig::default();
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(config.clone());
    // crit roll 8: no effect; motive roll 10 + 1 (hover) = 11: motive2
    let mut dice = FixedDice::new([(4, 4), (5, 5)]);
    let report = automation.run(&unit, &mut state, &trigger, &mut dice).unwrap();

    let hooks: Vec<_> = report.steps.iter().map(|s| s.rolled.request.hook).collect();
    assert_eq!(hooks, vec!["structure_crit", "motive_damage"]);
    assert_eq!(report.steps[0].result, StepOutcome::NoEffect);
    assert_eq!(report.steps[1].rolled.total, 11);
    assert_eq!(report.steps[1].result, StepOutcome::CritApplied(CritKey::Motive2));

    let resolver = Resolver::new(&unit, &state, &config.resolver);
    assert_eq!(resolver.movement_for("h"), Some(8));
    assert_eq!(resolver.tmm(), 1);
}

#[test]
fn motive_hit_at_cap_is_reported_not_applied() {
    let unit = hover();
    let mut state = CombatState::for_unit(&unit);
    state.apply_pending_crit(CritKey::Motive1, 2).unwrap();
    state.commit_pending(&unit).unwrap();
    let trigger = commit_damage(&unit, &mut state, 1);

    let automation = DamageAutomation::new(EngineConfig::default());
    let requests = automation.requests(&unit, &state, &trigger);
    let motive = requests
        .iter()
        .copied()
        .find(|r| r.kind == RollKind::MotiveDamage)
        .expect("vehicle can still move");

    let mut session = automation.session(&unit, motive, 0);
    // 4 + 4 + 1 = 9: motive1
    let rolled = session.set_roll(DiceRoll::new(4, 4).unwrap());
    assert_eq!(rolled.effect, RollEffect::Crit(CritKey::Motive1));

    let before = state.clone();
    let result = session.confirm(&mut state).unwrap();
    assert_eq!(result, StepOutcome::CapReached(CritKey::Motive1));
    assert_eq!(state, before);
}

#[test]
fn session_rerolls_and_requires_clean_state() {
    let unit = mek("Wolverine", UnitType::BattleMek);
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(EngineConfig::default());
    let request = automation.requests(&unit, &state, &trigger)[0];

    let unrolled = automation.session(&unit, request, 0);
    assert_eq!(unrolled.confirm(&mut state), Err(AutomationError::NotRolled));

    let mut session = automation.session(&unit, request, 0);
    let mut dice = FixedDice::totals([5, 4]);
    assert_eq!(session.roll(&mut dice).unwrap().effect, RollEffect::NoEffect);
    assert_eq!(
        session.roll(&mut dice).unwrap().effect,
        RollEffect::Crit(CritKey::FireControl)
    );
    assert_eq!(session.attempts(), 2);

    state.apply_pending_heat(1);
    let mut dirty = automation.session(&unit, request, 0);
    dirty.set_roll(DiceRoll::new(2, 2).unwrap());
    assert_eq!(dirty.confirm(&mut state), Err(AutomationError::PendingChanges));
    state.discard_pending();

    assert_eq!(
        session.confirm(&mut state),
        Ok(StepOutcome::CritApplied(CritKey::FireControl))
    );
    let config = EngineConfig::default();
    let resolver = Resolver::new(&unit, &state, &config.resolver);
    assert_eq!(resolver.to_hit(combat_core::RangeBand::Short), 6);
}

#[test]
fn case_vents_ammo_into_follow_up_damage() {
    let unit = mek("Hunchback", UnitType::BattleMek).with_special("CASE");
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(EngineConfig::default());
    // ammo hit, then the follow-up crit check rolls 5: no effect
    let mut dice = FixedDice::totals([2, 5]);
    let report = automation.run(&unit, &mut state, &trigger, &mut dice).unwrap();

    assert_eq!(report.steps.len(), 2);
    assert_eq!(
        report.steps[0].rolled.effect,
        RollEffect::Ammo(AmmoResolution::ExtraDamage(1))
    );
    assert!(matches!(
        report.steps[0].result,
        StepOutcome::ExtraDamage { amount: 1, .. }
    ));
    assert_eq!(report.steps[1].depth, 1);
    assert_eq!(state.structure_remaining(&unit, EvaluationMode::Committed), 2);
}

#[test]
fn unprotected_ammo_hit_destroys_and_skips_the_rest() {
    let unit = mek("Mining Mek", UnitType::IndustrialMek);
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(EngineConfig::default());
    let mut dice = FixedDice::totals([2, 7]);
    let report = automation.run(&unit, &mut state, &trigger, &mut dice).unwrap();

    assert!(report.destroyed());
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(dice.remaining(), 1);
    assert_eq!(state.armor_remaining(&unit, EvaluationMode::Committed), 0);
    assert_eq!(state.structure_remaining(&unit, EvaluationMode::Committed), 0);
    assert!(!state.is_dirty());
}

#[test]
fn energy_weapons_negate_ammo_hits() {
    let unit = mek("Firestarter", UnitType::BattleMek).with_special("ENE");
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 4);

    let automation = DamageAutomation::new(EngineConfig::default());
    let report = automation
        .run(&unit, &mut state, &trigger, &mut FixedDice::totals([2]))
        .unwrap();
    assert_eq!(report.steps[0].result, StepOutcome::AmmoNegated);
}

#[test]
fn aerospace_crits_need_manual_resolution() {
    let unit = UnitReference::new("Sparrowhawk", UnitType::AerospaceFighter)
        .with_armor(2, 2)
        .with_movement("a", 7);
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 3);

    let automation = DamageAutomation::new(EngineConfig::default());
    let report = automation
        .run(&unit, &mut state, &trigger, &mut FixedDice::totals([12]))
        .unwrap();
    assert_eq!(report.steps[0].result, StepOutcome::ManualResolution);
    assert!(state.crits().is_empty());
}

#[test]
fn runaway_follow_ups_hit_the_chain_limit() {
    let unit = UnitReference::new("Fortress", UnitType::BattleMek)
        .with_armor(0, 40)
        .with_movement(GROUND_MODE, 4)
        .with_special("CASE");
    let mut state = CombatState::for_unit(&unit);
    let trigger = commit_damage(&unit, &mut state, 1);

    let automation = DamageAutomation::new(EngineConfig::default());
    let mut dice = FixedDice::totals([2; 16]);
    let err = automation
        .run(&unit, &mut state, &trigger, &mut dice)
        .unwrap_err();

    assert_eq!(
        err.error,
        AutomationError::HookChainTooDeep {
            max: MAX_CHAIN_DEPTH
        }
    );
    assert_eq!(err.completed.steps.len(), MAX_CHAIN_DEPTH + 1);
    // every completed step stays committed
    assert_eq!(
        state.structure_damage(&unit, EvaluationMode::Committed),
        1 + MAX_CHAIN_DEPTH as u32 + 1
    );
}

#[test]
fn bundled_units_run_with_seeded_dice() {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../combat/content/data");
    let factory = ContentFactory::new(data);
    let config = factory.load_config().unwrap();
    let automation = DamageAutomation::new(config);

    for unit in factory.load_units().unwrap().units {
        let mut state = CombatState::for_unit(&unit);
        let trigger = commit_damage(&unit, &mut state, unit.armor + 1);

        let mut dice = RandomDice::from_seed(42);
        let report = automation
            .run(&unit, &mut state, &trigger, &mut dice)
            .unwrap();
        assert!(!state.is_dirty(), "{}", unit.name);
        if unit.unit_type == UnitType::ConventionalInfantry {
            assert!(report.is_empty());
        }
    }
}
