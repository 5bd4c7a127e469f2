//! Vitamin parts: mockups of real-world off-the-shelf objects
//!
//! Vitamins are never printed; they exist so assemblies can be
//! fit-checked against the object they hold.

mod phone;

pub use phone::Phone;

use crate::part::PartKind;
use crate::registry::{ManifestEntry, Registry};

/// Types this namespace offers for auto-registration
const MANIFEST: &[ManifestEntry] = &[ManifestEntry {
    type_name: "Phone",
    factory: Some(|| Box::new(Phone::default())),
}];

/// Namespace hook run by the catalog during discovery
pub(crate) fn register_parts(registry: &mut Registry) {
    registry.auto_register(MANIFEST, PartKind::Component);
}
