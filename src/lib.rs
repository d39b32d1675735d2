//! In-memory technology catalog with canonical key lookup.
//!
//! The crate registers human-readable technology names ("C++", "Next.js",
//! "REST APIs") and resolves each to a `{name, link}` record by a derived
//! canonical key, with case-insensitive exact lookup and substring search.
//! The shipped catalog lives in `data/technologies.json` and is validated
//! against `schema/technology_catalog.schema.json` on load; the
//! `tech-lookup` binary fronts the same operations on the command line.

use std::env;
use std::path::PathBuf;

pub mod catalog;

pub use catalog::{TechIndex, TechKey, Technology, TechnologyCatalog, load_catalog_from_path};

/// Environment variable honored by [`resolve_catalog_path`].
pub const CATALOG_ENV: &str = "TECHDEX_CATALOG";

/// Path of the catalog file shipped with the crate.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/technologies.json")
}

/// Pick the catalog file for this process.
///
/// Search order: an explicit path from the caller, then `TECHDEX_CATALOG`,
/// then the shipped file. No existence check happens here; loading reports
/// a missing file with the path that was chosen.
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Some(raw) = env::var_os(CATALOG_ENV) {
        if !raw.is_empty() {
            return PathBuf::from(raw);
        }
    }

    default_catalog_path()
}
