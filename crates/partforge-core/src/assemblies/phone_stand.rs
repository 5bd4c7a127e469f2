//! Phone stand assembly: base, cradle, and phone at the configured angle
//!
//! The `explode` offset lifts the cradle and phone apart for an
//! exploded-view variant.

use glam::DVec3;

use partforge_scad::Solid;

use crate::components::{StandBase, StandCradle};
use crate::config::StandDimensions;
use crate::part::{BuildError, Part};
use crate::vitamins::Phone;

/// Exploded-view separation between stacked parts
const EXPLODE_OFFSET: f64 = 30.0;

/// Complete phone stand assembly
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneStandAssembly {
    pub explode: f64,
    dims: StandDimensions,
}

impl PhoneStandAssembly {
    /// Create an assembly from the given dimensions
    pub fn new(dims: &StandDimensions) -> Self {
        Self {
            explode: 0.0,
            dims: dims.clone(),
        }
    }

    /// Exploded-view variant with default dimensions
    pub fn exploded() -> Self {
        Self {
            explode: EXPLODE_OFFSET,
            dims: StandDimensions::default(),
        }
    }
}

impl Default for PhoneStandAssembly {
    fn default() -> Self {
        Self::new(&StandDimensions::default())
    }
}

impl Part for PhoneStandAssembly {
    fn build(&self) -> Result<Solid, BuildError> {
        let dims = &self.dims;

        let base = StandBase::new(dims).build()?;

        // Cradle sits on the base plate, one wall in from the back edge
        let cradle_y = dims.base_depth / 2.0 - dims.base_slot_depth() / 2.0 - dims.wall_thickness;
        let cradle_z = dims.base_height / 2.0 + dims.cradle_back_height / 2.0;
        let cradle = StandCradle::new(dims)
            .build()?
            .translate(DVec3::new(0.0, cradle_y, cradle_z + self.explode));

        // Phone rests in the cradle, leaned back by the cradle angle
        let phone_z = dims.base_height / 2.0 + dims.cradle_lip_height / 2.0;
        let phone = Phone::new(&dims.phone)
            .build()?
            .translate(DVec3::new(0.0, cradle_y, phone_z + 2.0 * self.explode))
            .rotate_x(dims.cradle_angle);

        Ok(Solid::union(vec![base, cradle, phone]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_exploded() {
        assert_eq!(PhoneStandAssembly::default().explode, 0.0);
    }

    #[test]
    fn test_exploded_variant_offset() {
        assert_eq!(PhoneStandAssembly::exploded().explode, 30.0);
    }

    #[test]
    fn test_build_unions_three_parts() {
        let solid = PhoneStandAssembly::default().build().unwrap();
        match solid {
            Solid::Union { children } => assert_eq!(children.len(), 3),
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_phone_is_rotated_by_cradle_angle() {
        let solid = PhoneStandAssembly::default().build().unwrap();
        let Solid::Union { children } = solid else {
            panic!("expected union");
        };
        let Solid::Rotate { degrees, .. } = &children[2] else {
            panic!("expected rotated phone, got {:?}", children[2]);
        };
        assert_eq!(*degrees, DVec3::new(15.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_dimensions_propagate() {
        let mut dims = StandDimensions::default();
        dims.cradle_back_height = 1.0;
        let assembly = PhoneStandAssembly::new(&dims);
        assert!(matches!(
            assembly.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
