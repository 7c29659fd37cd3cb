//! # chemjson Core Library
//!
//! A library for interchanging molecular structures between a neutral,
//! line-oriented JSON representation and native chemical file formats.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless structure model
//!   (`Molecule`, `Atom`, `Bond`, `ElementTable`) and the neutral JSON codec
//!   (`JsonCodec`) with its deterministic compact and pretty layouts.
//!
//! - **[`engine`]: The Chemistry Boundary.** Defines the [`engine::traits::ChemistryEngine`]
//!   capability set consumed by the orchestration layer — native format parsing and
//!   writing, bond perception, 3D embedding, hydrogen saturation — without ever
//!   reimplementing chemistry itself. A geometry-only in-process backend is provided
//!   for pipelines that stay within the neutral representation.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   the codec and the engine boundary together into the end-to-end conversion
//!   procedure ([`workflows::convert::Converter`]), including the normalization
//!   policy (coordinate inference, centering, hydrogen handling).

pub mod core;
pub mod engine;
pub mod workflows;
