//! Provides the foundational layer of the library.
//!
//! This module contains the neutral structure model shared by every other
//! layer, together with the JSON codec that translates it to and from the
//! neutral textual encoding. Everything here is a pure value with no
//! dependency on any chemistry backend.

pub mod codec;
pub mod models;
