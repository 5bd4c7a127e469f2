//! Structural components and printable primitives

mod cube;
mod cylinder;
mod stand_base;
mod stand_cradle;

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use stand_base::StandBase;
pub use stand_cradle::StandCradle;

use crate::part::PartKind;
use crate::registry::{ManifestEntry, Registry};

/// Extra depth added to hole cutters so through-cuts clear both faces
pub(crate) const CUT_OVERSHOOT: f64 = 1.0;

/// Types this namespace offers for auto-registration
const MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        type_name: "Cube",
        factory: Some(|| Box::new(Cube::default())),
    },
    ManifestEntry {
        type_name: "Cylinder",
        factory: Some(|| Box::new(Cylinder::default())),
    },
    ManifestEntry {
        type_name: "StandBase",
        factory: Some(|| Box::new(StandBase::default())),
    },
    ManifestEntry {
        type_name: "StandCradle",
        factory: Some(|| Box::new(StandCradle::default())),
    },
];

/// Namespace hook run by the catalog during discovery
pub(crate) fn register_parts(registry: &mut Registry) {
    registry.auto_register(MANIFEST, PartKind::Component);
}
