//! Unit stat block loader.

use std::path::{Path, PathBuf};

use combat_core::{UnitCategory, UnitReference};
use serde::{Deserialize, Serialize};

use crate::loaders::{DataFormat, LoadResult, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<UnitReference>,
}

impl UnitCatalog {
    /// Finds a unit by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&UnitReference> {
        self.units.iter().find(|u| u.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Loader for unit stat blocks.
pub struct UnitLoader;

impl UnitLoader {
    /// Load a single stat block; the format follows the file extension.
    pub fn load(path: &Path) -> LoadResult<UnitReference> {
        let format = DataFormat::from_path(path)
            .ok_or_else(|| anyhow::anyhow!("Unsupported unit file: {}", path.display()))?;
        let content = read_file(path)?;
        let unit: UnitReference = format
            .parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit {}: {}", path.display(), e))?;

        validate(&unit)?;
        Ok(unit)
    }

    /// Load a catalog of stat blocks from a RON file.
    pub fn load_catalog(path: &Path) -> LoadResult<UnitCatalog> {
        let content = read_file(path)?;
        let catalog: UnitCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        for unit in &catalog.units {
            validate(unit)?;
        }
        Ok(catalog)
    }

    /// Load every supported file in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<UnitCatalog> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && DataFormat::from_path(path).is_some())
            .collect();
        paths.sort();

        let units = paths
            .iter()
            .map(|path| Self::load(path))
            .collect::<LoadResult<Vec<_>>>()?;
        Ok(UnitCatalog { units })
    }
}

fn validate(unit: &UnitReference) -> LoadResult<()> {
    if unit.name.trim().is_empty() {
        anyhow::bail!("Unit has an empty name");
    }
    if !unit.arcs.is_empty() && unit.category() != UnitCategory::LargeVessel {
        anyhow::bail!(
            "Unit '{}' ({}) lists firing arcs but is not a large vessel",
            unit.name,
            unit.unit_type
        );
    }
    Ok(())
}
