//! Provides the public, user-facing conversion API.
//!
//! This layer ties the neutral JSON codec and the chemistry-engine boundary
//! together into the end-to-end conversion procedure, including the
//! normalization policy: when to infer 3D coordinates, always re-centering
//! at the origin, and the requested hydrogen handling.

pub mod convert;
