//! Keyed view over a technology catalog.
//!
//! The index flattens the category arrays into one ordered list and derives
//! a key -> record map via [`TechKey::normalize`]. When two names normalize
//! to the same key, the later entry takes the map slot while both remain in
//! the flat list. That shadowing is the documented conflict policy, not an
//! error, so building never fails; only loading from disk can, and that is
//! gated by the shipped JSON Schema.

use crate::catalog::identity::TechKey;
use crate::catalog::model::{Technology, TechnologyCatalog, load_catalog_from_path};
use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
/// Technology catalog plus a derived index keyed by canonical key.
///
/// Immutable once built. Concurrent readers need no coordination; to swap in
/// new data, build a fresh index and replace the handle (e.g. an `Arc`)
/// atomically so readers never observe a partially populated catalog.
pub struct TechIndex {
    entries: Vec<Technology>,
    by_key: BTreeMap<TechKey, Technology>,
}

impl TechIndex {
    /// Build the index from raw catalog contents.
    ///
    /// Infallible: every name yields a key, and key collisions resolve
    /// last-write-wins instead of erroring.
    pub fn build(catalog: &TechnologyCatalog) -> Self {
        let entries: Vec<Technology> = catalog.entries().cloned().collect();
        let mut by_key = BTreeMap::new();
        for tech in &entries {
            by_key.insert(TechKey::normalize(&tech.name), tech.clone());
        }
        Self { entries, by_key }
    }

    /// Load a catalog file, validate it against the shipped schema, and
    /// build the index.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Ok(Self::build(&catalog))
    }

    /// Resolve a record by display name or canonical key.
    ///
    /// Both forms normalize through the same path, so "C++", "c++", and
    /// "cpp" all reach the same slot. Returns `None` for unknown inputs;
    /// absence is a normal outcome, never an error.
    pub fn get(&self, name_or_key: &str) -> Option<&Technology> {
        self.by_key.get(&TechKey::normalize(name_or_key))
    }

    /// All records in build order, duplicates and shadowed entries included.
    pub fn all(&self) -> &[Technology] {
        &self.entries
    }

    /// Case-insensitive substring match against display names (not keys).
    ///
    /// Matches keep build order; the empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Technology> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|tech| tech.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Iterates canonical keys in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &TechKey> {
        self.by_key.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema_path = resolve_catalog_schema_path(catalog_path);
    let schema_file = File::open(&schema_path)
        .with_context(|| format!("opening schema {}", schema_path.display()))?;
    let schema_value: Value = serde_json::from_reader(BufReader::new(schema_file))
        .with_context(|| format!("parsing schema {}", schema_path.display()))?;
    let compiled = match JSONSchema::compile(&schema_value) {
        Ok(schema) => schema,
        Err(err) => bail!("compiling schema {}: {err}", schema_path.display()),
    };

    if let Err(errors) = compiled.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "technology catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            details
        );
    }
    Ok(())
}

fn resolve_catalog_schema_path(catalog_path: &Path) -> PathBuf {
    if let Some(base) = catalog_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join("schema/technology_catalog.schema.json");
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/technology_catalog.schema.json")
}
