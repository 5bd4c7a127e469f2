//! OpenSCAD document emission

use std::fmt::Write as _;
use std::path::Path;

use glam::DVec3;

use crate::solid::Solid;

/// An OpenSCAD document wrapping a single root solid
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Solid,
}

impl Document {
    /// Create a document from a composed solid
    pub fn new(root: Solid) -> Self {
        Self { root }
    }

    /// The root solid of this document
    pub fn root(&self) -> &Solid {
        &self.root
    }

    /// Serialize to OpenSCAD source text
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        emit(&mut out, &self.root, 0);
        out
    }

    /// Write the serialized document to a file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        std::fs::write(path, self.serialize()).map_err(|e| DocumentError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Recursively emit one solid as an OpenSCAD statement
fn emit(out: &mut String, solid: &Solid, depth: usize) {
    let indent = "  ".repeat(depth);
    match solid {
        Solid::Cube { size, center } => {
            let _ = write!(out, "{indent}cube({}", vec3(*size));
            if *center {
                out.push_str(", center = true");
            }
            out.push_str(");\n");
        }
        Solid::Cylinder {
            radius,
            height,
            center,
        } => {
            let _ = write!(out, "{indent}cylinder(h = {}, r = {}", num(*height), num(*radius));
            if *center {
                out.push_str(", center = true");
            }
            out.push_str(");\n");
        }
        Solid::Sphere { radius } => {
            let _ = writeln!(out, "{indent}sphere(r = {});", num(*radius));
        }
        Solid::Translate { offset, child } => {
            let _ = writeln!(out, "{indent}translate({}) {{", vec3(*offset));
            emit(out, child, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        }
        Solid::Rotate { degrees, child } => {
            let _ = writeln!(out, "{indent}rotate({}) {{", vec3(*degrees));
            emit(out, child, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        }
        Solid::Color { rgba, child } => {
            let _ = writeln!(
                out,
                "{indent}color([{}, {}, {}, {}]) {{",
                rgba[0], rgba[1], rgba[2], rgba[3]
            );
            emit(out, child, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        }
        Solid::Union { children } => {
            let _ = writeln!(out, "{indent}union() {{");
            for child in children {
                emit(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}}}");
        }
        Solid::Difference { children } => {
            let _ = writeln!(out, "{indent}difference() {{");
            for child in children {
                emit(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}}}");
        }
    }
}

/// Format a scalar; f64 Display already prints the shortest round-trip form
fn num(value: f64) -> String {
    format!("{}", value)
}

/// Format a vector as an OpenSCAD literal
fn vec3(v: DVec3) -> String {
    format!("[{}, {}, {}]", num(v.x), num(v.y), num(v.z))
}

/// Document-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_statement() {
        let doc = Document::new(Solid::cube(DVec3::new(20.0, 20.0, 20.0), true));
        assert_eq!(doc.serialize(), "cube([20, 20, 20], center = true);\n");
    }

    #[test]
    fn test_cylinder_statement() {
        let doc = Document::new(Solid::cylinder(10.0, 30.0, true));
        assert_eq!(doc.serialize(), "cylinder(h = 30, r = 10, center = true);\n");
    }

    #[test]
    fn test_uncentered_primitives_omit_flag() {
        let doc = Document::new(Solid::cube(DVec3::splat(5.0), false));
        assert_eq!(doc.serialize(), "cube([5, 5, 5]);\n");
    }

    #[test]
    fn test_difference_block() {
        let doc = Document::new(Solid::difference(vec![
            Solid::cube(DVec3::new(10.0, 10.0, 4.0), true),
            Solid::cylinder(2.5, 6.0, true),
        ]));
        let expected = "\
difference() {
  cube([10, 10, 4], center = true);
  cylinder(h = 6, r = 2.5, center = true);
}
";
        assert_eq!(doc.serialize(), expected);
    }

    #[test]
    fn test_transform_nesting_indents() {
        let doc = Document::new(
            Solid::sphere(5.0)
                .translate(DVec3::new(0.0, 1.5, 0.0))
                .rotate_x(15.0),
        );
        let expected = "\
rotate([15, 0, 0]) {
  translate([0, 1.5, 0]) {
    sphere(r = 5);
  }
}
";
        assert_eq!(doc.serialize(), expected);
    }

    #[test]
    fn test_color_block() {
        let doc = Document::new(Solid::cube(DVec3::splat(1.0), true).color([0.2, 0.2, 0.2, 1.0]));
        let text = doc.serialize();
        assert!(text.starts_with("color([0.2, 0.2, 0.2, 1]) {"));
        assert!(text.contains("cube([1, 1, 1], center = true);"));
    }

    #[test]
    fn test_write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.scad");
        let doc = Document::new(Solid::cube(DVec3::splat(2.0), true));
        doc.write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.serialize());
    }

    #[test]
    fn test_write_to_missing_dir_is_io_error() {
        let doc = Document::new(Solid::sphere(1.0));
        let err = doc.write_to("/nonexistent-dir/part.scad").unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
