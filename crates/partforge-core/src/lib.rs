//! Partforge Core
//!
//! This crate contains the part catalog behind the partforge CLI:
//! - Dimensions: shared parametric configuration with derived accessors
//! - Part: the buildable-part trait and part kinds
//! - Registry: name -> factory mapping with manifest auto-registration
//! - Catalog: the fixed-order discovery driver
//! - The concrete part set: vitamins, components, assemblies

pub mod assemblies;
pub mod catalog;
pub mod components;
pub mod config;
pub mod part;
pub mod registry;
pub mod vitamins;

pub use catalog::{discover, global};
pub use config::{CubeConfig, CylinderConfig, PhoneDimensions, StandDimensions};
pub use part::{BuildError, Part, PartKind};
pub use registry::{ManifestEntry, PartEntry, PartFactory, PartInfo, Registry, camel_to_kebab};
