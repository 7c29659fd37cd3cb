//! Defines the neutral structure model.
//!
//! This module contains the data structures representing molecular structures
//! in a toolkit-independent way: atoms with an element symbol and 3D location,
//! bonds referencing atoms by index, and the molecule value that owns both.
//! It also provides the ordered element vocabulary used to map element symbols
//! to and from atomic numbers at the chemistry-engine boundary.

pub mod atom;
pub mod bond;
pub mod element;
pub mod error;
pub mod molecule;
