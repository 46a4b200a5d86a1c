//! Content factory for loading everything the engine needs from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{EngineConfig, UnitReference};

use crate::loaders::{ConfigLoader, LoadResult, UnitCatalog, UnitLoader};

/// Content factory that loads unit data and config from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── units/
///     ├── locust.ron
///     ├── saracen.toml
///     └── leopard.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`; defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load every stat block under `units/`.
    pub fn load_units(&self) -> LoadResult<UnitCatalog> {
        UnitLoader::load_dir(&self.data_dir.join("units"))
    }

    /// Load one unit by name.
    pub fn find_unit(&self, name: &str) -> LoadResult<UnitReference> {
        let catalog = self.load_units()?;
        catalog
            .find(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unit '{}' not found in {}", name, self.data_dir.display()))
    }
}
