//! Stand cradle
//!
//! U-shaped cradle: back wall, bottom shelf, and front lip form the
//! pocket the phone rests in.

use glam::DVec3;

use partforge_scad::Solid;

use crate::components::CUT_OVERSHOOT;
use crate::config::StandDimensions;
use crate::part::{BuildError, Part};

/// U-shaped cradle that holds the phone
#[derive(Debug, Clone, PartialEq)]
pub struct StandCradle {
    pub interior_width: f64,
    pub exterior_width: f64,
    pub wall_thickness: f64,
    pub cradle_depth: f64,
    pub back_height: f64,
    pub lip_height: f64,
    pub slot_width: f64,
}

impl StandCradle {
    /// Create a cradle from the given dimensions
    pub fn new(dims: &StandDimensions) -> Self {
        Self {
            interior_width: dims.cradle_interior_width(),
            exterior_width: dims.cradle_exterior_width(),
            wall_thickness: dims.wall_thickness,
            cradle_depth: dims.cradle_depth,
            back_height: dims.cradle_back_height,
            lip_height: dims.cradle_lip_height,
            slot_width: dims.cradle_slot_width(),
        }
    }
}

impl Default for StandCradle {
    fn default() -> Self {
        Self::new(&StandDimensions::default())
    }
}

impl Part for StandCradle {
    fn build(&self) -> Result<Solid, BuildError> {
        if self.back_height <= self.wall_thickness {
            return Err(BuildError::InvalidDimensions(format!(
                "back height {} leaves no cavity above the {} shelf",
                self.back_height, self.wall_thickness
            )));
        }
        if self.cradle_depth <= self.wall_thickness {
            return Err(BuildError::InvalidDimensions(format!(
                "cradle depth {} leaves no cavity in front of the {} back wall",
                self.cradle_depth, self.wall_thickness
            )));
        }
        if self.lip_height >= self.back_height {
            return Err(BuildError::InvalidDimensions(format!(
                "lip height {} must be below back height {}",
                self.lip_height, self.back_height
            )));
        }

        let outer = Solid::cube(
            DVec3::new(self.exterior_width, self.cradle_depth, self.back_height),
            true,
        );

        // Interior cavity: leaves the back wall and the bottom shelf
        let cavity_depth = self.cradle_depth - self.wall_thickness;
        let cavity_height = self.back_height - self.wall_thickness;
        let cavity = Solid::cube(
            DVec3::new(
                self.interior_width,
                cavity_depth,
                cavity_height + CUT_OVERSHOOT,
            ),
            true,
        )
        .translate(DVec3::new(
            0.0,
            -self.wall_thickness / 2.0,
            self.wall_thickness / 2.0 + CUT_OVERSHOOT / 2.0,
        ));

        // Phone slot cut through the front face; the material left below
        // it is the lip
        let slot = Solid::cube(
            DVec3::new(
                self.slot_width,
                self.cradle_depth + CUT_OVERSHOOT,
                self.back_height + CUT_OVERSHOOT,
            ),
            true,
        )
        .translate(DVec3::new(
            0.0,
            0.0,
            (self.back_height - self.lip_height) / 2.0,
        ));

        Ok(Solid::difference(vec![outer, cavity, slot]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths() {
        let cradle = StandCradle::default();
        assert_eq!(cradle.interior_width, 77.0);
        assert_eq!(cradle.exterior_width, 83.0);
        assert_eq!(cradle.slot_width, 10.0);
    }

    #[test]
    fn test_build_cuts_cavity_and_slot() {
        let solid = StandCradle::default().build().unwrap();
        match solid {
            Solid::Difference { children } => assert_eq!(children.len(), 3),
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_shallow_back_fails() {
        let cradle = StandCradle {
            back_height: 2.0,
            lip_height: 1.0,
            ..StandCradle::default()
        };
        assert!(matches!(
            cradle.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_tall_lip_fails() {
        let cradle = StandCradle {
            lip_height: 80.0,
            ..StandCradle::default()
        };
        assert!(matches!(
            cradle.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
