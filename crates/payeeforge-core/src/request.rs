use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::BankDefinition;

/// Input for one generation call.
///
/// Requests are ephemeral: nothing about them is persisted between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// 3-letter country code, matched case-sensitively against the catalog.
    pub country_code: String,
    /// Number of records to produce; unsigned, so negative counts are
    /// unrepresentable.
    pub record_count: u32,
    /// SWIFT codes restricting the eligible bank set; empty means no
    /// restriction.
    #[serde(default)]
    pub selected_bank_swift_codes: BTreeSet<String>,
    /// Caller-supplied banks merged transiently into the eligible set.
    #[serde(default)]
    pub custom_banks: Vec<BankDefinition>,
}

impl GenerationRequest {
    pub fn new(country_code: impl Into<String>, record_count: u32) -> Self {
        Self {
            country_code: country_code.into(),
            record_count,
            selected_bank_swift_codes: BTreeSet::new(),
            custom_banks: Vec::new(),
        }
    }

    pub fn with_selected<I, S>(mut self, swift_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_bank_swift_codes = swift_codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom_banks(mut self, banks: Vec<BankDefinition>) -> Self {
        self.custom_banks = banks;
        self
    }

    /// Input-contract check.
    ///
    /// Unknown countries and stale bank selections degrade gracefully
    /// downstream; only malformed custom banks are rejected here.
    pub fn validate(&self) -> Result<()> {
        if self.country_code.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "country code must not be empty".to_string(),
            ));
        }
        for bank in &self.custom_banks {
            if bank.swift_code.trim().is_empty() {
                return Err(Error::InvalidRequest(format!(
                    "custom bank '{}' is missing a SWIFT code",
                    bank.name
                )));
            }
            if bank.name.trim().is_empty() {
                return Err(Error::InvalidRequest(format!(
                    "custom bank with SWIFT code '{}' is missing a name",
                    bank.swift_code
                )));
            }
        }
        Ok(())
    }
}
