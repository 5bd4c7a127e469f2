//! Part discovery driver
//!
//! The catalog knows the fixed order in which part namespaces register:
//! vitamins first, then structural components, then assemblies. Nothing
//! currently depends on that order, but keeping it fixed keeps discovery
//! deterministic. External callers (the CLI, tests) go through this
//! module and never touch the per-namespace hooks directly.

use std::sync::OnceLock;

use crate::registry::{PartInfo, Registry};
use crate::{assemblies, components, vitamins};

/// Build a fresh registry by running every namespace hook in order
pub fn discover() -> Registry {
    let mut registry = Registry::new();
    vitamins::register_parts(&mut registry);
    components::register_parts(&mut registry);
    assemblies::register_parts(&mut registry);
    registry
}

/// Process-wide registry snapshot
///
/// The first caller runs discovery; the `OnceLock` barrier keeps two
/// first-callers from double-scanning. The map is immutable afterwards.
pub fn global() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(discover)
}

/// Listing records for the full catalog, in ascending name order
pub fn list_parts() -> Vec<PartInfo> {
    global().list()
}
