//! Defines the chemistry-engine boundary.
//!
//! The conversion workflow never reimplements chemistry; it drives an
//! external cheminformatics toolkit through the narrow
//! [`traits::ChemistryEngine`] capability set: native format parsing and
//! writing, bond perception and order estimation, 3D embedding, hydrogen
//! saturation, and centering. Backends adapt a concrete toolkit to this
//! trait; [`geometry::GeometryOnlyEngine`] is the built-in backend for
//! pipelines that stay within the neutral representation.

pub mod error;
pub mod geometry;
pub mod traits;
