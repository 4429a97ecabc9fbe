//! Export writers for generated records.
//!
//! Both writers are pure consumers of an already-generated record sequence
//! and impose no constraints back on the engine.

pub mod csv;
pub mod json;
