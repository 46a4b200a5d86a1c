//! Environment configuration for the unit-card tool.
use std::env;
use std::path::PathBuf;

/// Settings read from `UNIT_CARD_*` environment variables.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml` and `units/`.
    pub data_dir: PathBuf,
    /// Engine config file; `data_dir/config.toml` when unset.
    pub config_path: Option<PathBuf>,
    /// Pilot skill used when `--skill` is not given.
    pub skill: Option<u32>,
    /// Seed for reproducible dice.
    pub seed: Option<u64>,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/combat/content/data";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UNIT_CARD_DATA_DIR` - data directory (default: `crates/combat/content/data`)
    /// - `UNIT_CARD_CONFIG` - engine config TOML (default: `<data dir>/config.toml`)
    /// - `UNIT_CARD_SKILL` - pilot skill 0..=8
    /// - `UNIT_CARD_SEED` - RNG seed for dice rolls
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("UNIT_CARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR)),
            config_path: env::var_os("UNIT_CARD_CONFIG").map(PathBuf::from),
            skill: read_env("UNIT_CARD_SKILL"),
            seed: read_env("UNIT_CARD_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
