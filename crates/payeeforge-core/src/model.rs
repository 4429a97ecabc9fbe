use serde::{Deserialize, Serialize};

/// One financial institution a record can draw on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDefinition {
    /// Display name of the bank.
    pub name: String,
    /// SWIFT/BIC identifier, conventionally 8 to 11 characters.
    pub swift_code: String,
}

impl BankDefinition {
    pub fn new(name: impl Into<String>, swift_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            swift_code: swift_code.into(),
        }
    }

    /// First four characters of the SWIFT code, uppercased.
    ///
    /// This is the bank-code fragment embedded in synthesized account
    /// identifiers. Shorter codes yield whatever characters exist.
    pub fn bank_code4(&self) -> String {
        self.swift_code.chars().take(4).collect::<String>().to_uppercase()
    }
}

/// Static profile for one jurisdiction.
///
/// Profiles are read-only at runtime: the catalog never creates or mutates
/// an entry while handling requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    /// 3-letter country code, the unique catalog key.
    pub code: String,
    pub display_name: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Known banks for the country; may be empty, which triggers the
    /// generic-bank fallback at resolution time.
    pub known_banks: Vec<BankDefinition>,
    pub city_names: Vec<String>,
    pub region_names: Vec<String>,
}

/// One generated payee row.
///
/// Constructed fresh per generation call and immutable once returned;
/// ownership is entirely with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryRecord {
    pub full_name: String,
    pub bank_name: String,
    /// Account identifier shaped by the country's format rule.
    pub primary_identifier: String,
    /// The chosen bank's SWIFT code.
    pub secondary_identifier: String,
    pub currency_code: String,
    pub street1: String,
    /// Optional unit line; empty when absent.
    pub street2: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country_display_name: String,
    pub country_code: String,
}
