//! OpenSCAD Modeling Backend
//!
//! This crate provides:
//! - Solid: a small CSG tree (primitives, transforms, booleans)
//! - Document: OpenSCAD source emission and file output
//!
//! Callers compose a `Solid`, wrap it in a `Document`, and either
//! serialize it to OpenSCAD text or write it straight to disk. The
//! tree is never evaluated here; that is OpenSCAD's job.

pub mod document;
pub mod solid;

pub use document::{Document, DocumentError};
pub use solid::Solid;
