//! Phone vitamin: smartphone mockup for the phone stand assembly
//!
//! Dark gray body with a screen slab on the front (-Y) face and a
//! camera bump on the back (+Y) face.

use glam::DVec3;

use partforge_scad::Solid;

use crate::config::PhoneDimensions;
use crate::part::{BuildError, Part};

/// Thickness of the screen slab
const SCREEN_THICKNESS: f64 = 0.5;

const BODY_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
const SCREEN_COLOR: [f32; 4] = [0.1, 0.1, 0.15, 1.0];
const BUMP_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

/// Smartphone mockup vitamin
#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub screen_bezel: f64,
    pub camera_bump_width: f64,
    pub camera_bump_height: f64,
    pub camera_bump_thickness: f64,
}

impl Phone {
    /// Create a phone mockup from the given dimensions
    pub fn new(dims: &PhoneDimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            thickness: dims.thickness,
            screen_bezel: dims.screen_bezel,
            camera_bump_width: dims.camera_bump_width,
            camera_bump_height: dims.camera_bump_height,
            camera_bump_thickness: dims.camera_bump_thickness,
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new(&PhoneDimensions::default())
    }
}

impl Part for Phone {
    fn build(&self) -> Result<Solid, BuildError> {
        let screen_width = self.width - 2.0 * self.screen_bezel;
        let screen_height = self.height - 2.0 * self.screen_bezel;
        if screen_width <= 0.0 || screen_height <= 0.0 {
            return Err(BuildError::InvalidDimensions(format!(
                "screen bezel {} leaves no screen area",
                self.screen_bezel
            )));
        }

        let body = Solid::cube(DVec3::new(self.width, self.thickness, self.height), true)
            .color(BODY_COLOR);

        // Screen slab flush on the front face
        let screen = Solid::cube(
            DVec3::new(screen_width, SCREEN_THICKNESS, screen_height),
            true,
        )
        .color(SCREEN_COLOR)
        .translate(DVec3::new(
            0.0,
            -(self.thickness + SCREEN_THICKNESS) / 2.0,
            0.0,
        ));

        // Camera bump in the upper-left quadrant of the back face
        let bump = Solid::cube(
            DVec3::new(
                self.camera_bump_width,
                self.camera_bump_thickness,
                self.camera_bump_height,
            ),
            true,
        )
        .color(BUMP_COLOR)
        .translate(DVec3::new(
            -self.width / 4.0 + self.camera_bump_width / 4.0,
            (self.thickness + self.camera_bump_thickness) / 2.0,
            self.height / 4.0,
        ));

        Ok(Solid::union(vec![body, screen, bump]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dimension_model() {
        let phone = Phone::default();
        assert_eq!(phone.width, 75.0);
        assert_eq!(phone.height, 150.0);
        assert_eq!(phone.thickness, 8.0);
        assert_eq!(phone.screen_bezel, 3.0);
    }

    #[test]
    fn test_camera_bump_fits_on_back() {
        let phone = Phone::default();
        assert!(phone.camera_bump_width < phone.width);
        assert!(phone.camera_bump_height < phone.height);
    }

    #[test]
    fn test_build_is_union_of_three_solids() {
        let solid = Phone::default().build().unwrap();
        match solid {
            Solid::Union { children } => assert_eq!(children.len(), 3),
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_bezel_fails() {
        let phone = Phone {
            screen_bezel: 100.0,
            ..Phone::default()
        };
        assert!(matches!(
            phone.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
