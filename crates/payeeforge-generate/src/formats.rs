//! Per-country identifier and postal-code formats.
//!
//! Each supported country maps to one variant of [`CountryFormat`], which
//! owns its identifier template; unsupported codes land on one of the two
//! generic fallbacks. Outputs are format-plausible only: the two check
//! digits are uniformly random in 10..=99, never computed with Mod-97, so
//! the identifiers must not be fed to anything expecting checksum validity.

use payeeforge_core::BankDefinition;
use rand::Rng;

const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Countries that get a synthetic 21-character IBAN shape without a
/// dedicated template of their own.
const GENERIC_IBAN_COUNTRIES: &[&str] = &[
    "AUT", "EST", "FIN", "GRC", "LUX", "MLT", "PRT", "SVK", "SVN", "CYP", "LVA", "LTU",
];

/// Identifier template for one jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFormat {
    Ireland,
    UnitedKingdom,
    Germany,
    France,
    Netherlands,
    Italy,
    Spain,
    Belgium,
    UnitedStates,
    Australia,
    /// Synthetic `code + kk + 16 digits` IBAN for the fixed generic set.
    GenericIban,
    /// Plain 12-digit account number for everything else.
    GenericAccount,
}

impl CountryFormat {
    /// Resolve the template for a 3-letter country code.
    pub fn for_country(code: &str) -> Self {
        match code {
            "IRL" => Self::Ireland,
            "GBR" => Self::UnitedKingdom,
            "DEU" => Self::Germany,
            "FRA" => Self::France,
            "NLD" => Self::Netherlands,
            "ITA" => Self::Italy,
            "ESP" => Self::Spain,
            "BEL" => Self::Belgium,
            "USA" => Self::UnitedStates,
            "AUS" => Self::Australia,
            _ if GENERIC_IBAN_COUNTRIES.contains(&code) => Self::GenericIban,
            _ => Self::GenericAccount,
        }
    }

    /// Synthesize a primary account identifier for `bank` in this format.
    ///
    /// `country_code` is only consulted by the generic IBAN variant, which
    /// embeds it as the prefix.
    pub fn primary_identifier(
        &self,
        country_code: &str,
        bank: &BankDefinition,
        rng: &mut impl Rng,
    ) -> String {
        match self {
            // Bank code from the BIC, 6-digit sort code, 8-digit account.
            Self::Ireland => format!(
                "IE{}{}{}{}",
                check_digits(rng),
                bank.bank_code4(),
                digits(rng, 6),
                digits(rng, 8)
            ),
            Self::UnitedKingdom => format!(
                "GB{}{}{}{}",
                check_digits(rng),
                bank.bank_code4(),
                digits(rng, 6),
                digits(rng, 8)
            ),
            // 8-digit Bankleitzahl, 10-digit account; no alpha bank code.
            Self::Germany => format!(
                "DE{}{}{}",
                check_digits(rng),
                digits(rng, 8),
                digits(rng, 10)
            ),
            // bank(5) + guichet(5) + account(11 alnum) + key(2).
            Self::France => format!(
                "FR{}{}{}{}{}",
                check_digits(rng),
                digits(rng, 5),
                digits(rng, 5),
                alnum(rng, 11),
                digits(rng, 2)
            ),
            Self::Netherlands => format!(
                "NL{}{}{}",
                check_digits(rng),
                bank.bank_code4(),
                digits(rng, 10)
            ),
            // check char + ABI(5) + CAB(5) + account(12 alnum).
            Self::Italy => format!(
                "IT{}{}{}{}{}",
                check_digits(rng),
                alnum(rng, 1),
                digits(rng, 5),
                digits(rng, 5),
                alnum(rng, 12)
            ),
            // bank(4) + branch(4) + check(2) + account(10).
            Self::Spain => format!(
                "ES{}{}{}{}{}",
                check_digits(rng),
                digits(rng, 4),
                digits(rng, 4),
                digits(rng, 2),
                digits(rng, 10)
            ),
            // Real Belgian accounts carry their own mod-97 digits;
            // intentionally not computed here.
            Self::Belgium => format!("BE{}{}", check_digits(rng), digits(rng, 12)),
            // Account number only, variable length.
            Self::UnitedStates => {
                let len = rng.random_range(8..=12);
                digits(rng, len)
            }
            // Account only; the BSB is a secondary identifier and not
            // generated here.
            Self::Australia => digits(rng, 9),
            Self::GenericIban => {
                format!("{country_code}{}{}", check_digits(rng), digits(rng, 16))
            }
            Self::GenericAccount => digits(rng, 12),
        }
    }
}

/// Synthesize a postal code for a country.
///
/// The US, UK and Ireland branches accept both the 2-letter and 3-letter
/// code; every other country keys on the 3-letter form only. The asymmetry
/// is legacy dual-key behavior that callers depend on, kept on purpose.
pub fn postal_code(country_code: &str, rng: &mut impl Rng) -> String {
    match country_code {
        "US" | "USA" => digits(rng, 5),
        "GB" | "GBR" => format!("SW{}A {}AA", digits(rng, 1), digits(rng, 1)),
        "IE" | "IRL" => format!("D{} {}", digits(rng, 2), alnum(rng, 4)),
        _ => digits(rng, 5),
    }
}

/// Two random check digits in 10..=99, as a string.
fn check_digits(rng: &mut impl Rng) -> String {
    rng.random_range(10..=99u32).to_string()
}

fn digits(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from_digit(rng.random_range(0..10u32), 10).unwrap_or('0'))
        .collect()
}

fn alnum(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| ALNUM[rng.random_range(0..ALNUM.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn bank() -> BankDefinition {
        BankDefinition::new("Bank of Ireland", "BOFIIE2D")
    }

    #[test]
    fn for_country_dispatches_generic_variants() {
        assert_eq!(CountryFormat::for_country("IRL"), CountryFormat::Ireland);
        assert_eq!(CountryFormat::for_country("LVA"), CountryFormat::GenericIban);
        assert_eq!(
            CountryFormat::for_country("JPN"),
            CountryFormat::GenericAccount
        );
    }

    #[test]
    fn ireland_embeds_the_bank_code() {
        let mut rng = rng();
        for _ in 0..50 {
            let id = CountryFormat::Ireland.primary_identifier("IRL", &bank(), &mut rng);
            assert_eq!(id.len(), 22);
            assert!(id.starts_with("IE"));
            assert_eq!(&id[4..8], "BOFI");
            assert!(id[8..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn germany_is_all_digits_after_the_prefix() {
        let mut rng = rng();
        for _ in 0..50 {
            let id = CountryFormat::Germany.primary_identifier("DEU", &bank(), &mut rng);
            assert_eq!(id.len(), 22);
            assert!(id.starts_with("DE"));
            assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn france_has_an_alnum_account_segment() {
        let mut rng = rng();
        for _ in 0..50 {
            let id = CountryFormat::France.primary_identifier("FRA", &bank(), &mut rng);
            assert_eq!(id.len(), 27);
            assert!(id.starts_with("FR"));
            assert!(id[14..25]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            assert!(id[25..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn united_states_length_stays_in_band() {
        let mut rng = rng();
        for _ in 0..200 {
            let id = CountryFormat::UnitedStates.primary_identifier("USA", &bank(), &mut rng);
            assert!((8..=12).contains(&id.len()), "unexpected length {}", id.len());
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn generic_iban_prefixes_the_country_code() {
        let mut rng = rng();
        let id = CountryFormat::GenericIban.primary_identifier("FIN", &bank(), &mut rng);
        assert_eq!(id.len(), 21);
        assert!(id.starts_with("FIN"));
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn check_digits_stay_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let kk: u32 = check_digits(&mut rng).parse().expect("numeric check digits");
            assert!((10..=99).contains(&kk));
        }
    }

    #[test]
    fn postal_codes_accept_both_key_forms_for_legacy_countries() {
        let mut rng = rng();
        for code in ["US", "USA"] {
            let postal = postal_code(code, &mut rng);
            assert_eq!(postal.len(), 5);
            assert!(postal.chars().all(|c| c.is_ascii_digit()));
        }
        for code in ["GB", "GBR"] {
            let postal = postal_code(code, &mut rng);
            assert!(postal.starts_with("SW"));
            assert!(postal.ends_with("AA"));
            assert_eq!(postal.len(), 8);
        }
        for code in ["IE", "IRL"] {
            let postal = postal_code(code, &mut rng);
            assert!(postal.starts_with('D'));
            assert_eq!(postal.len(), 8);
        }
    }

    #[test]
    fn other_countries_get_five_digit_postal_codes() {
        let mut rng = rng();
        // Only the 3-letter form keys the legacy branches; a 2-letter code
        // outside them falls through to the default.
        for code in ["DEU", "JPN", "ZZZ", "DE"] {
            let postal = postal_code(code, &mut rng);
            assert_eq!(postal.len(), 5);
            assert!(postal.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
