//! Shared parametric dimensions
//!
//! Base fields live in plain structs; every dependent quantity is a
//! method that recomputes from the current base values. Derived values
//! are never stored, so mutating a base field can never leave a stale
//! reading behind.

use serde::{Deserialize, Serialize};

/// Phone mockup dimensions in millimeters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneDimensions {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub corner_radius: f64,
    pub screen_bezel: f64,
    pub camera_bump_width: f64,
    pub camera_bump_height: f64,
    pub camera_bump_thickness: f64,
}

impl Default for PhoneDimensions {
    fn default() -> Self {
        Self {
            width: 75.0,
            height: 150.0,
            thickness: 8.0,
            corner_radius: 8.0,
            screen_bezel: 3.0,
            camera_bump_width: 30.0,
            camera_bump_height: 24.0,
            camera_bump_thickness: 2.0,
        }
    }
}

/// Phone stand dimensions: base fields plus derived accessors
///
/// Angles are in degrees, lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandDimensions {
    pub phone: PhoneDimensions,
    /// Wall thickness shared by cradle walls and the base slot border
    pub wall_thickness: f64,
    /// Fit clearance applied on each side of a mating part
    pub clearance: f64,
    /// Back-lean of the phone in the cradle, degrees
    pub cradle_angle: f64,
    pub cradle_depth: f64,
    pub cradle_back_height: f64,
    pub cradle_lip_height: f64,
    pub base_depth: f64,
    pub base_height: f64,
}

impl Default for StandDimensions {
    fn default() -> Self {
        Self {
            phone: PhoneDimensions::default(),
            wall_thickness: 3.0,
            clearance: 1.0,
            cradle_angle: 15.0,
            cradle_depth: 12.0,
            cradle_back_height: 60.0,
            cradle_lip_height: 12.0,
            base_depth: 80.0,
            base_height: 6.0,
        }
    }
}

impl StandDimensions {
    /// Interior width of the cradle: phone width plus clearance on each side
    pub fn cradle_interior_width(&self) -> f64 {
        self.phone.width + 2.0 * self.clearance
    }

    /// Width of the phone slot: phone thickness plus clearance on each side
    pub fn cradle_slot_width(&self) -> f64 {
        self.phone.thickness + 2.0 * self.clearance
    }

    /// Exterior width of the cradle: interior plus a wall on each side
    pub fn cradle_exterior_width(&self) -> f64 {
        self.cradle_interior_width() + 2.0 * self.wall_thickness
    }

    /// The base plate is exactly as wide as the cradle exterior
    pub fn base_width(&self) -> f64 {
        self.cradle_exterior_width()
    }

    /// Width of the base slot that receives the cradle
    pub fn base_slot_width(&self) -> f64 {
        self.cradle_exterior_width() + 2.0 * self.clearance
    }

    /// Depth of the base slot that receives the cradle
    pub fn base_slot_depth(&self) -> f64 {
        self.cradle_depth + 2.0 * self.clearance
    }

    /// Cradle angle converted to radians
    pub fn cradle_angle_radians(&self) -> f64 {
        self.cradle_angle.to_radians()
    }
}

/// Parametric cube defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    pub size: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self { size: 20.0 }
    }
}

/// Parametric cylinder defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderConfig {
    pub radius: f64,
    pub height: f64,
    pub center: bool,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            height: 30.0,
            center: true,
        }
    }
}
