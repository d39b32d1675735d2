//! Deserializable representation of `data/technologies.json`.
//!
//! The types mirror the catalog file: four category arrays of `{name, link}`
//! records. Categories only fix concatenation order; use `TechIndex` for
//! keyed lookup and search over the flattened contents.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One catalog entry: a display name and its reference link.
///
/// The link is carried as-is; nothing checks it for well-formedness or
/// reachability.
pub struct Technology {
    pub name: String,
    pub link: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// Raw catalog contents grouped by category.
///
/// Missing categories deserialize as empty. Grouping carries no behavior
/// beyond the fixed order in which [`TechnologyCatalog::entries`] walks it.
pub struct TechnologyCatalog {
    #[serde(default)]
    pub languages: Vec<Technology>,
    #[serde(default)]
    pub frameworks: Vec<Technology>,
    #[serde(default)]
    pub tools_and_platforms: Vec<Technology>,
    #[serde(default)]
    pub databases: Vec<Technology>,
}

impl TechnologyCatalog {
    /// All entries in catalog order: languages, frameworks,
    /// tools/platforms, databases. Order within a category is file order.
    pub fn entries(&self) -> impl Iterator<Item = &Technology> {
        self.languages
            .iter()
            .chain(&self.frameworks)
            .chain(&self.tools_and_platforms)
            .chain(&self.databases)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
            + self.frameworks.len()
            + self.tools_and_platforms.len()
            + self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read and parse a catalog file from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<TechnologyCatalog> {
    let data = fs::read_to_string(path)?;
    let catalog: TechnologyCatalog = serde_json::from_str(&data)?;
    Ok(catalog)
}
