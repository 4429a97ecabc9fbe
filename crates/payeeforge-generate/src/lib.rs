//! Synthetic beneficiary generation engine for Payeeforge.
//!
//! This crate turns a [`payeeforge_core::GenerationRequest`] into
//! format-plausible payee records: account identifiers, postal codes and
//! addresses shaped like the target country's real banking formats, filled
//! with random data. Nothing here is checksum-valid or tied to real
//! accounts; the output is test-fixture material.

pub mod banks;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod formats;
pub mod output;

pub use banks::resolve_eligible_banks;
pub use catalog::CountryCatalog;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use formats::CountryFormat;
