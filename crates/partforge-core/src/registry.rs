//! Part registration
//!
//! The registry maps part names to zero-argument factories. Parts reach
//! it two ways: an explicit `register` call (which may overwrite), or a
//! module manifest walked by `auto_register` (first registration wins).
//! Auto-registered names are derived from the part's type name with
//! `camel_to_kebab`, so other tooling can rely on stable part names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::part::{Part, PartKind};

/// Zero-argument factory producing a part with default parameters
pub type PartFactory = fn() -> Box<dyn Part>;

/// A registered part: name, kind, and factory
#[derive(Clone)]
pub struct PartEntry {
    pub name: String,
    pub kind: PartKind,
    pub factory: PartFactory,
}

impl std::fmt::Debug for PartEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// One entry of a module manifest, the explicit stand-in for scanning a
/// module's types at runtime
///
/// `factory` is `None` when the type offers no zero-argument
/// construction; such entries are skipped during auto-registration.
#[derive(Clone, Copy)]
pub struct ManifestEntry {
    pub type_name: &'static str,
    pub factory: Option<PartFactory>,
}

/// Listing record for external JSON consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartInfo {
    pub name: String,
    pub part_type: PartKind,
    pub renderable: bool,
}

/// Mapping from part name to entry
///
/// Constructed once at startup and read afterwards; keys iterate in
/// lexicographic order.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, PartEntry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part factory under an explicit name, overwriting any
    /// existing entry with the same name
    pub fn register(&mut self, name: impl Into<String>, kind: PartKind, factory: PartFactory) {
        let name = name.into();
        self.entries.insert(
            name.clone(),
            PartEntry {
                name,
                kind,
                factory,
            },
        );
    }

    /// Register every constructible entry of a module manifest
    ///
    /// Names are derived with `camel_to_kebab`. A name already present is
    /// left untouched, so explicit registrations and earlier modules are
    /// never displaced; running the same manifest twice is a no-op.
    pub fn auto_register(&mut self, manifest: &[ManifestEntry], kind: PartKind) {
        for entry in manifest {
            let Some(factory) = entry.factory else {
                debug!(
                    type_name = entry.type_name,
                    "skipping manifest entry without default construction"
                );
                continue;
            };
            let name = camel_to_kebab(entry.type_name);
            if self.entries.contains_key(&name) {
                continue;
            }
            self.entries.insert(
                name.clone(),
                PartEntry {
                    name,
                    kind,
                    factory,
                },
            );
        }
    }

    /// Look up a part by name
    pub fn get(&self, name: &str) -> Option<&PartEntry> {
        self.entries.get(name)
    }

    /// Number of registered parts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = &PartEntry> {
        self.entries.values()
    }

    /// Listing records in ascending name order
    pub fn list(&self) -> Vec<PartInfo> {
        self.entries
            .values()
            .map(|entry| PartInfo {
                name: entry.name.clone(),
                part_type: entry.kind,
                renderable: true,
            })
            .collect()
    }
}

/// Convert a CamelCase type name to kebab-case
///
/// A boundary is inserted between a lowercase-or-digit character and a
/// following uppercase letter, and between an uppercase letter and a
/// following uppercase-then-lowercase run (acronym boundaries).
pub fn camel_to_kebab(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
                out.push('-');
            } else if prev.is_ascii_uppercase() && next_is_lower {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
