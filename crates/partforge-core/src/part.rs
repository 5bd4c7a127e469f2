//! Buildable-part trait and part kinds

use serde::{Deserialize, Serialize};

use partforge_scad::Solid;

/// A named, parametrized buildable geometric object
pub trait Part {
    /// Compose the solid geometry for this part from its current field values
    fn build(&self) -> Result<Solid, BuildError>;
}

/// Kind of a registered part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Component,
    Assembly,
}

impl PartKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartKind::Component => "component",
            PartKind::Assembly => "assembly",
        }
    }
}

/// Part construction errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}
