//! The data directory shipped with the crate loads cleanly.

use std::path::PathBuf;

use combat_content::ContentFactory;
use combat_core::{CombatState, EvaluationMode, Resolver, UnitCategory, UnitType};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn bundled_config_and_units_load() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    assert!(config.automation.enabled);

    let catalog = factory.load_units().unwrap();
    assert!(catalog.len() >= 4);
    assert!(catalog.units.iter().any(|u| u.category() == UnitCategory::LargeVessel));
}

#[test]
fn bundled_unit_resolves() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let griffin = factory.find_unit("Griffin GRF-1N").unwrap();
    assert_eq!(griffin.unit_type, UnitType::BattleMek);

    let mut state = CombatState::for_unit(&griffin);
    state.queue_damage(&griffin, griffin.armor + 1);
    let stats = Resolver::new(&griffin, &state, &config.resolver).stats();
    assert_eq!(stats.armor, 0);
    assert_eq!(stats.structure, griffin.structure - 1);
    assert_eq!(
        state.armor_remaining(&griffin, EvaluationMode::Committed),
        griffin.armor
    );
}

#[test]
fn missing_unit_is_an_error() {
    assert!(factory().find_unit("Atlas AS7-D").is_err());
}
