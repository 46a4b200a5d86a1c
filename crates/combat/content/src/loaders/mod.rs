//! Content loaders for reading unit data from files.

pub mod config;
pub mod factory;
pub mod unit;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use unit::{UnitCatalog, UnitLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Serialization format of a data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Ron,
    Json,
    Toml,
}

impl DataFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "ron" => Some(Self::Ron),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Deserializes `content` in this format.
    pub fn parse<T: serde::de::DeserializeOwned>(&self, content: &str) -> LoadResult<T> {
        let value = match self {
            Self::Ron => ron::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?,
            Self::Json => serde_json::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?,
            Self::Toml => toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?,
        };
        Ok(value)
    }
}
