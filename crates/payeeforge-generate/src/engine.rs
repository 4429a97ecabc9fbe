//! Record generation orchestration.

use payeeforge_core::{BeneficiaryRecord, GenerationRequest};
use rand::Rng;
use tracing::{debug, info};

use crate::banks::resolve_eligible_banks;
use crate::catalog::CountryCatalog;
use crate::errors::GenerationError;
use crate::formats::{CountryFormat, postal_code};

/// Mixed-culture sample pools for payee names.
const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Ahmed", "Wei", "Yan", "Hiroshi", "Fatima", "Santiago", "Elena",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Kim", "Chen", "Singh", "Sato",
];
const STREET_NAMES: &[&str] = &[
    "Main St", "High St", "Park Ave", "Oak Ln", "Maple Dr", "Cedar Blvd", "Sunset Way",
    "Broadway", "Victoria Rd", "Church St", "Station Rd", "Market St", "King St",
];

/// Drives repeated record construction for one request.
///
/// The engine holds no mutable state; every call is independent and the
/// randomness source is caller-owned, so tests can seed it.
#[derive(Debug, Clone, Copy)]
pub struct GenerationEngine<'a> {
    catalog: &'a CountryCatalog,
}

impl GenerationEngine<'static> {
    /// Engine over the shared global catalog.
    pub fn new() -> Self {
        Self {
            catalog: CountryCatalog::global(),
        }
    }
}

impl Default for GenerationEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GenerationEngine<'a> {
    pub fn with_catalog(catalog: &'a CountryCatalog) -> Self {
        Self { catalog }
    }

    /// Generate exactly `request.record_count` records.
    ///
    /// Unknown country codes degrade to a derived profile and stale bank
    /// selections degrade to the full candidate set; only malformed custom
    /// banks are an error.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut impl Rng,
    ) -> Result<Vec<BeneficiaryRecord>, GenerationError> {
        request.validate()?;

        let profile = self.catalog.profile_for(&request.country_code);
        let profile_banks = if profile.known_banks.is_empty() {
            self.catalog.banks_for_country(&profile.code)
        } else {
            profile.known_banks.clone()
        };
        let eligible = resolve_eligible_banks(
            &profile_banks,
            &request.selected_bank_swift_codes,
            &request.custom_banks,
        );
        let format = CountryFormat::for_country(&profile.code);

        info!(
            country = %profile.code,
            records = request.record_count,
            eligible_banks = eligible.len(),
            "generating beneficiaries"
        );

        let mut records = Vec::with_capacity(request.record_count as usize);
        for _ in 0..request.record_count {
            let bank = pick(&eligible, rng);
            let full_name = format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng));
            let street1 = format!("{} {}", rng.random_range(1..=999), pick(STREET_NAMES, rng));
            let street2 = if rng.random_bool(0.5) {
                format!("Apt {}", rng.random_range(0..100))
            } else {
                String::new()
            };
            let city = if profile.city_names.is_empty() {
                "City".to_string()
            } else {
                pick(&profile.city_names, rng).clone()
            };
            let region = if profile.region_names.is_empty() {
                "Region".to_string()
            } else {
                pick(&profile.region_names, rng).clone()
            };

            records.push(BeneficiaryRecord {
                full_name,
                bank_name: bank.name.clone(),
                primary_identifier: format.primary_identifier(&profile.code, bank, rng),
                secondary_identifier: bank.swift_code.clone(),
                currency_code: profile.currency_code.clone(),
                street1,
                street2,
                city,
                region,
                postal_code: postal_code(&profile.code, rng),
                country_display_name: profile.display_name.clone(),
                country_code: profile.code.clone(),
            });
        }

        debug!(generated = records.len(), "generation finished");
        Ok(records)
    }
}

/// Uniform pick from a non-empty slice.
///
/// The eligibility resolver guarantees a non-empty bank set and the name
/// and street pools are fixed constants, so indexing is in bounds.
fn pick<'s, T>(items: &'s [T], rng: &mut impl Rng) -> &'s T {
    &items[rng.random_range(0..items.len())]
}
