//! Parametric cube primitive

use glam::DVec3;

use partforge_scad::Solid;

use crate::config::CubeConfig;
use crate::part::{BuildError, Part};

/// A parametric cube
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub size: f64,
}

impl Cube {
    /// Create a cube from the given configuration
    pub fn new(config: &CubeConfig) -> Self {
        Self { size: config.size }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(&CubeConfig::default())
    }
}

impl Part for Cube {
    fn build(&self) -> Result<Solid, BuildError> {
        if self.size <= 0.0 {
            return Err(BuildError::InvalidDimensions(format!(
                "cube size must be positive, got {}",
                self.size
            )));
        }
        Ok(Solid::cube(DVec3::splat(self.size), true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(Cube::default().size, 20.0);
    }

    #[test]
    fn test_build() {
        let solid = Cube::default().build().unwrap();
        assert_eq!(
            solid,
            Solid::Cube {
                size: DVec3::splat(20.0),
                center: true
            }
        );
    }

    #[test]
    fn test_nonpositive_size_fails() {
        let cube = Cube { size: 0.0 };
        assert!(matches!(
            cube.build(),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}
