//! Technology catalog wiring.
//!
//! This module wraps the JSON catalog under `data/technologies.json` so
//! callers can load a validated snapshot and resolve records by canonical
//! key. `identity` derives the keys, `model` mirrors the file layout, and
//! `TechIndex` is the lookup surface consumers actually hold.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::TechKey;
pub use index::TechIndex;
pub use model::{Technology, TechnologyCatalog};

pub use model::load_catalog_from_path;
