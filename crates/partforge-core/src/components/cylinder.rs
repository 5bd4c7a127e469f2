//! Parametric cylinder primitive

use partforge_scad::Solid;

use crate::config::CylinderConfig;
use crate::part::{BuildError, Part};

/// A parametric cylinder
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
    pub center: bool,
}

impl Cylinder {
    /// Create a cylinder from the given configuration
    pub fn new(config: &CylinderConfig) -> Self {
        Self {
            radius: config.radius,
            height: config.height,
            center: config.center,
        }
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::new(&CylinderConfig::default())
    }
}

impl Part for Cylinder {
    fn build(&self) -> Result<Solid, BuildError> {
        if self.radius <= 0.0 || self.height <= 0.0 {
            return Err(BuildError::InvalidDimensions(format!(
                "cylinder radius and height must be positive, got r = {}, h = {}",
                self.radius, self.height
            )));
        }
        Ok(Solid::cylinder(self.radius, self.height, self.center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cylinder = Cylinder::default();
        assert_eq!(cylinder.radius, 10.0);
        assert_eq!(cylinder.height, 30.0);
        assert!(cylinder.center);
    }

    #[test]
    fn test_build() {
        let solid = Cylinder::default().build().unwrap();
        assert_eq!(
            solid,
            Solid::Cylinder {
                radius: 10.0,
                height: 30.0,
                center: true
            }
        );
    }

    #[test]
    fn test_negative_radius_fails() {
        let cylinder = Cylinder {
            radius: -1.0,
            ..Cylinder::default()
        };
        assert!(matches!(
            cylinder.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
