//! Terminal unit card: apply damage to a unit, run follow-on rolls and print
//! the card as it now plays.
mod args;
mod config;
mod render;

use anyhow::{Context, Result};
use args::CardArgs;
use clap::Parser;
use combat_content::{ConfigLoader, ContentFactory};
use combat_core::{CombatState, DamagePickerMode, EngineConfig, Resolver, UnitReference};
use config::CliConfig;
use runtime::{DamageAutomation, DamageTrigger, RandomDice};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let args = CardArgs::parse();
    run(&config, &args)
}

/// Logs go to stderr so the card on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine_config(config: &CliConfig, factory: &ContentFactory) -> Result<EngineConfig> {
    match &config.config_path {
        Some(path) => ConfigLoader::load(path),
        None => factory.load_config(),
    }
}

fn run(config: &CliConfig, args: &CardArgs) -> Result<()> {
    let factory = ContentFactory::new(&config.data_dir);
    let engine = load_engine_config(config, &factory)?;
    let unit = factory.find_unit(&args.unit())?;
    let skill = args.skill.or(config.skill).unwrap_or(unit.skill);

    info!(unit = %unit.name, skill, data_dir = %config.data_dir.display(), "Loaded unit");

    let mut state = CombatState::for_unit(&unit);
    queue_changes(&unit, &mut state, args, engine.damage_picker)?;

    if args.dry_run || !state.is_dirty() {
        let stats = Resolver::new(&unit, &state, &engine.resolver)
            .with_skill(skill)
            .stats();
        print!("{}", render::card(&unit, &stats));
        return Ok(());
    }

    let receipt = state
        .commit_pending(&unit)
        .with_context(|| format!("cannot apply changes to {}", unit.name))?;

    if !args.no_auto {
        let automation = DamageAutomation::new(engine.clone());
        let mut dice = match args.seed.or(config.seed) {
            Some(seed) => RandomDice::from_seed(seed),
            None => RandomDice::from_entropy(),
        };
        let trigger = DamageTrigger::from_receipt(&receipt);

        match automation.run(&unit, &mut state, &trigger, &mut dice) {
            Ok(report) => print!("{}", render::report(&report)),
            Err(partial) => {
                print!("{}", render::report(&partial.completed));
                return Err(partial.into());
            }
        }
    }

    let stats = Resolver::new(&unit, &state, &engine.resolver)
        .with_skill(skill)
        .stats();
    print!("{}", render::card(&unit, &stats));
    Ok(())
}

fn queue_changes(
    unit: &UnitReference,
    state: &mut CombatState,
    args: &CardArgs,
    picker: DamagePickerMode,
) -> Result<()> {
    if let Some(damage) = args.damage {
        match picker {
            DamagePickerMode::Unified => {
                state.queue_damage(unit, damage);
            }
            DamagePickerMode::Split => {
                anyhow::bail!("damage picker is split; use --armor and --structure")
            }
        }
    }

    state.apply_pending_armor(args.armor);
    state.apply_pending_structure(args.structure);
    state.apply_pending_heat(args.heat);
    for key in &args.crits {
        state.apply_pending_crit(*key, 1)?;
    }
    for ability in &args.abilities {
        state.apply_pending_ability_consume(ability);
    }
    Ok(())
}
