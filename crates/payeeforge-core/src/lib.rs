//! Core contracts for Payeeforge.
//!
//! This crate defines the beneficiary data model and the request type shared
//! between the generation engine and the CLI.

pub mod error;
pub mod model;
pub mod request;

pub use error::{Error, Result};
pub use model::{BankDefinition, BeneficiaryRecord, CountryProfile};
pub use request::GenerationRequest;
