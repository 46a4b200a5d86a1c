//! Command-line arguments.

use clap::Parser;
use combat_core::CritKey;

/// Apply damage to a unit and print its card as it now plays
#[derive(Clone, Debug, Parser)]
#[command(name = "unit-card")]
#[command(about = "Apply damage to a unit and print its card", long_about = None)]
#[command(version)]
pub struct CardArgs {
    /// Unit name as listed in the catalog (e.g., Griffin GRF-1N)
    #[arg(value_name = "UNIT", required = true, num_args = 1..)]
    name: Vec<String>,

    /// Damage spilled from armor into structure
    #[arg(long, value_name = "N")]
    pub damage: Option<u32>,

    /// Armor damage (split entry)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub armor: i32,

    /// Structure damage (split entry)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub structure: i32,

    /// Heat change, negative to cool down
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub heat: i32,

    /// Critical hit, e.g. mp, fire-control, motive2 (repeatable)
    #[arg(long = "crit", value_name = "KEY")]
    pub crits: Vec<CritKey>,

    /// Consume one use of an ability, e.g. BOMB (repeatable)
    #[arg(long = "use", value_name = "ABILITY")]
    pub abilities: Vec<String>,

    /// Pilot skill
    #[arg(long, value_name = "SKILL", value_parser = clap::value_parser!(u32).range(0..=8))]
    pub skill: Option<u32>,

    /// Seed for automation dice
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Skip follow-on rolls
    #[arg(long)]
    pub no_auto: bool,

    /// Preview without committing
    #[arg(long)]
    pub dry_run: bool,
}

impl CardArgs {
    /// Unit name with its words joined back together.
    pub fn unit(&self) -> String {
        self.name.join(" ")
    }
}
