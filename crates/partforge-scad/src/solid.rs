//! CSG solid tree

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A node in the CSG tree, mirroring the OpenSCAD statements it emits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    /// Rectangular box
    Cube { size: DVec3, center: bool },
    /// Cylinder along the Z axis
    Cylinder {
        radius: f64,
        height: f64,
        center: bool,
    },
    /// Sphere centered at the origin
    Sphere { radius: f64 },
    /// Translation applied to a child solid
    Translate { offset: DVec3, child: Box<Solid> },
    /// Rotation in degrees around X, Y, Z (OpenSCAD convention)
    Rotate { degrees: DVec3, child: Box<Solid> },
    /// Display color (RGBA, 0.0-1.0)
    Color { rgba: [f32; 4], child: Box<Solid> },
    /// Union of all children
    Union { children: Vec<Solid> },
    /// First child minus all remaining children
    Difference { children: Vec<Solid> },
}

impl Solid {
    /// Create a cube with the given extents
    pub fn cube(size: DVec3, center: bool) -> Self {
        Solid::Cube { size, center }
    }

    /// Create a cylinder along the Z axis
    pub fn cylinder(radius: f64, height: f64, center: bool) -> Self {
        Solid::Cylinder {
            radius,
            height,
            center,
        }
    }

    /// Create a sphere centered at the origin
    pub fn sphere(radius: f64) -> Self {
        Solid::Sphere { radius }
    }

    /// Translate this solid by the given offset
    pub fn translate(self, offset: DVec3) -> Self {
        Solid::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Rotate this solid by the given angles in degrees
    pub fn rotate(self, degrees: DVec3) -> Self {
        Solid::Rotate {
            degrees,
            child: Box::new(self),
        }
    }

    /// Rotate this solid around the X axis
    pub fn rotate_x(self, degrees: f64) -> Self {
        self.rotate(DVec3::new(degrees, 0.0, 0.0))
    }

    /// Apply a display color to this solid
    pub fn color(self, rgba: [f32; 4]) -> Self {
        Solid::Color {
            rgba,
            child: Box::new(self),
        }
    }

    /// Union of the given solids
    pub fn union(children: Vec<Solid>) -> Self {
        Solid::Union { children }
    }

    /// First solid minus the remaining solids
    pub fn difference(children: Vec<Solid>) -> Self {
        Solid::Difference { children }
    }

    /// Number of nodes in this tree, including self
    pub fn node_count(&self) -> usize {
        match self {
            Solid::Cube { .. } | Solid::Cylinder { .. } | Solid::Sphere { .. } => 1,
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Color { child, .. } => 1 + child.node_count(),
            Solid::Union { children } | Solid::Difference { children } => {
                1 + children.iter().map(Solid::node_count).sum::<usize>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_nesting() {
        let solid = Solid::cube(DVec3::splat(10.0), true)
            .translate(DVec3::new(0.0, 5.0, 0.0))
            .rotate_x(15.0);

        match &solid {
            Solid::Rotate { degrees, child } => {
                assert_eq!(*degrees, DVec3::new(15.0, 0.0, 0.0));
                assert!(matches!(**child, Solid::Translate { .. }));
            }
            other => panic!("expected rotate at root, got {:?}", other),
        }
    }

    #[test]
    fn test_node_count() {
        let solid = Solid::difference(vec![
            Solid::cube(DVec3::splat(20.0), true),
            Solid::cylinder(5.0, 25.0, true).translate(DVec3::ZERO),
        ]);
        assert_eq!(solid.node_count(), 4);
    }
}
