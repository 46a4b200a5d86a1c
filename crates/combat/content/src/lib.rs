//! Unit reference data and engine configuration loaders.
//!
//! This crate reads the static inputs of the combat engine from data files:
//! - Unit stat blocks (RON, JSON or TOML, picked by file extension)
//! - Unit catalogs (RON list of stat blocks)
//! - Engine configuration (TOML)
//!
//! Content is handed to the engine as immutable [`combat_core::UnitReference`]
//! values and never appears in combat state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DataFormat, LoadResult, UnitCatalog, UnitLoader};
