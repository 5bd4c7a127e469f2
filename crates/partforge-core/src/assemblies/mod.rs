//! Assemblies: multiple parts composed at their configured positions

mod phone_stand;

pub use phone_stand::PhoneStandAssembly;

use crate::part::PartKind;
use crate::registry::{ManifestEntry, Registry};

/// Types this namespace offers for auto-registration
const MANIFEST: &[ManifestEntry] = &[ManifestEntry {
    type_name: "PhoneStandAssembly",
    factory: Some(|| Box::new(PhoneStandAssembly::default())),
}];

/// Namespace hook run by the catalog during discovery
pub(crate) fn register_parts(registry: &mut Registry) {
    // Explicit registrations first; auto-discovery never displaces them.
    registry.register("phone_stand_exploded", PartKind::Assembly, || {
        Box::new(PhoneStandAssembly::exploded())
    });
    registry.auto_register(MANIFEST, PartKind::Assembly);
}
