//! Stand base plate
//!
//! Flat rectangular plate with a through slot near the back edge that
//! receives the cradle.

use glam::DVec3;

use partforge_scad::Solid;

use crate::components::CUT_OVERSHOOT;
use crate::config::StandDimensions;
use crate::part::{BuildError, Part};

/// Flat base plate with cradle mounting slot
#[derive(Debug, Clone, PartialEq)]
pub struct StandBase {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub slot_width: f64,
    pub slot_depth: f64,
    pub wall_thickness: f64,
}

impl StandBase {
    /// Create a base plate from the given dimensions
    pub fn new(dims: &StandDimensions) -> Self {
        Self {
            width: dims.base_width(),
            depth: dims.base_depth,
            height: dims.base_height,
            slot_width: dims.base_slot_width(),
            slot_depth: dims.base_slot_depth(),
            wall_thickness: dims.wall_thickness,
        }
    }
}

impl Default for StandBase {
    fn default() -> Self {
        Self::new(&StandDimensions::default())
    }
}

impl Part for StandBase {
    fn build(&self) -> Result<Solid, BuildError> {
        if self.height <= 0.0 {
            return Err(BuildError::InvalidDimensions(format!(
                "base height must be positive, got {}",
                self.height
            )));
        }
        if self.slot_depth + self.wall_thickness > self.depth {
            return Err(BuildError::InvalidDimensions(format!(
                "slot depth {} plus wall {} exceeds base depth {}",
                self.slot_depth, self.wall_thickness, self.depth
            )));
        }

        let plate = Solid::cube(DVec3::new(self.width, self.depth, self.height), true);

        // Through slot one wall in from the back edge
        let slot_y = self.depth / 2.0 - self.slot_depth / 2.0 - self.wall_thickness;
        let slot = Solid::cube(
            DVec3::new(
                self.slot_width,
                self.slot_depth,
                self.height + CUT_OVERSHOOT,
            ),
            true,
        )
        .translate(DVec3::new(0.0, slot_y, 0.0));

        Ok(Solid::difference(vec![plate, slot]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths_follow_cradle() {
        let dims = StandDimensions::default();
        let base = StandBase::default();
        assert_eq!(base.width, dims.cradle_exterior_width());
        assert!(base.slot_width >= dims.cradle_exterior_width());
    }

    #[test]
    fn test_build_is_plate_minus_slot() {
        let solid = StandBase::default().build().unwrap();
        match solid {
            Solid::Difference { children } => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0], Solid::Cube { .. }));
                assert!(matches!(children[1], Solid::Translate { .. }));
            }
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_slot_fails() {
        let base = StandBase {
            slot_depth: 100.0,
            ..StandBase::default()
        };
        assert!(matches!(
            base.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
