//! Static country reference data.
//!
//! The catalog is process-wide immutable reference data: built once, never
//! mutated by request handling, safe to share across threads without
//! locking. Codes absent from the catalog degrade to a derived profile
//! rather than an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use payeeforge_core::{BankDefinition, CountryProfile};

/// Countries with a full profile: display name, currency and real-looking
/// bank definitions. Everything else goes through the derived-profile path.
const PROFILES: &[(&str, &str, &str, &[(&str, &str)])] = &[
    (
        "USA",
        "United States",
        "USD",
        &[
            ("Chase", "CHASUS33"),
            ("Bank of America", "BOFAUS3N"),
            ("Wells Fargo", "PNBPUS33"),
            ("Citi", "CITIUS33"),
        ],
    ),
    (
        "GBR",
        "United Kingdom",
        "GBP",
        &[
            ("Barclays", "BARCGB22"),
            ("HSBC", "HBUKGB44"),
            ("Lloyds", "LOYDGB22"),
            ("NatWest", "NWBKGB2L"),
        ],
    ),
    (
        "IRL",
        "Ireland",
        "EUR",
        &[
            ("Bank of Ireland", "BOFIIE2D"),
            ("AIB", "AIBKIE2D"),
            ("Ulster Bank", "ULSBIE2D"),
        ],
    ),
    (
        "DEU",
        "Germany",
        "EUR",
        &[
            ("Deutsche Bank", "DEUTDEFF"),
            ("Commerzbank", "COBADEFF"),
            ("KfW", "KREDDEFF"),
        ],
    ),
    (
        "FRA",
        "France",
        "EUR",
        &[
            ("BNP Paribas", "BNPAFRPP"),
            ("Societe Generale", "SOGEFRPP"),
            ("Credit Agricole", "AGRIFRPP"),
        ],
    ),
    (
        "AUS",
        "Australia",
        "AUD",
        &[
            ("Commonwealth Bank", "CTBAAU2S"),
            ("Westpac", "WPACAU2S"),
            ("ANZ", "ANZBAU3M"),
        ],
    ),
    (
        "CAN",
        "Canada",
        "CAD",
        &[
            ("RBC", "ROYCCAT2"),
            ("TD Bank", "TDOMCATT"),
            ("Scotiabank", "NOSCCATT"),
        ],
    ),
    (
        "JPN",
        "Japan",
        "JPY",
        &[
            ("MUFG", "BOTKJPJT"),
            ("SMBC", "SMBCJPJT"),
            ("Mizuho", "MHCBJPJT"),
        ],
    ),
    (
        "SGP",
        "Singapore",
        "SGD",
        &[
            ("DBS", "DBSSSGSG"),
            ("OCBC", "OCBCSGSG"),
            ("UOB", "UOVBSGSG"),
        ],
    ),
    (
        "BRA",
        "Brazil",
        "BRL",
        &[
            ("Itau", "ITAUBRSP"),
            ("Bradesco", "BRDEBRSP"),
            ("Banco do Brasil", "BRASBRRJ"),
        ],
    ),
    (
        "NLD",
        "Netherlands",
        "EUR",
        &[
            ("ING", "INGBNL2A"),
            ("ABN AMRO", "ABNANL2A"),
            ("Rabobank", "RABONL2U"),
        ],
    ),
    (
        "ESP",
        "Spain",
        "EUR",
        &[
            ("Santander", "BSMDESMM"),
            ("BBVA", "BBVAESMM"),
            ("CaixaBank", "CAIXESBB"),
        ],
    ),
    (
        "ITA",
        "Italy",
        "EUR",
        &[("Intesa Sanpaolo", "BCITITMM"), ("UniCredit", "UNCRITM1")],
    ),
    (
        "CHE",
        "Switzerland",
        "CHF",
        &[("UBS", "UBSWCHZH"), ("Credit Suisse", "CRESCHZZ")],
    ),
    (
        "CHN",
        "China",
        "CNY",
        &[("ICBC", "ICBCCNBJ"), ("Bank of China", "BKCHCNBJ")],
    ),
    (
        "IND",
        "India",
        "INR",
        &[
            ("SBI", "SBININBB"),
            ("HDFC", "HDFCINBB"),
            ("ICICI", "ICICINBB"),
        ],
    ),
    (
        "HKG",
        "Hong Kong",
        "HKD",
        &[("HSBC HK", "HSBCHKHH"), ("Standard Chartered", "SCBLHKHH")],
    ),
    (
        "SWE",
        "Sweden",
        "SEK",
        &[("SEB", "ESSEESS"), ("Swedbank", "SWEDSESS")],
    ),
    (
        "BEL",
        "Belgium",
        "EUR",
        &[("KBC", "KREDITBE"), ("Belfius", "GKCCBEBB")],
    ),
    (
        "AUT",
        "Austria",
        "EUR",
        &[("Erste Group", "GIBAATWW"), ("Raiffeisen", "RZBAATWW")],
    ),
    (
        "POL",
        "Poland",
        "PLN",
        &[("PKO BP", "BPKOPLPW"), ("Pekao", "PKOPPLPW")],
    ),
    (
        "TUR",
        "Turkey",
        "TRY",
        &[("Ziraat", "TCZBATII"), ("Isbank", "ISBKTRIS")],
    ),
    (
        "ZAF",
        "South Africa",
        "ZAR",
        &[("Standard Bank", "SBZAZAJJ"), ("FirstRand", "FIRNZAJJ")],
    ),
    (
        "KOR",
        "South Korea",
        "KRW",
        &[("KB Kookmin", "KOOKKRSE"), ("Shinhan", "SHBKKRSE")],
    ),
    (
        "MEX",
        "Mexico",
        "MXN",
        &[("BBVA Mexico", "BCMRMXMM"), ("Banorte", "BMNOMXMM")],
    ),
];

/// Display names for codes beyond the fully-profiled set; used when listing
/// countries and when naming derived profiles.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AFG", "Afghanistan"),
    ("AGO", "Angola"),
    ("ALA", "Åland Islands"),
    ("ALB", "Albania"),
    ("ARE", "United Arab Emirates"),
    ("ARG", "Argentina"),
    ("ATG", "Antigua and Barbuda"),
    ("AUS", "Australia"),
    ("AUT", "Austria"),
    ("BEL", "Belgium"),
    ("BEN", "Benin"),
    ("BES", "Bonaire"),
    ("BGD", "Bangladesh"),
    ("BHR", "Bahrain"),
    ("BHS", "Bahamas"),
    ("BRA", "Brazil"),
    ("BRB", "Barbados"),
    ("CAN", "Canada"),
    ("CHE", "Switzerland"),
    ("CHN", "China"),
    ("CXR", "Christmas Island"),
    ("CZE", "Czechia"),
    ("DEU", "Germany"),
    ("DNK", "Denmark"),
    ("DZA", "Algeria"),
    ("ECU", "Ecuador"),
    ("ESP", "Spain"),
    ("EST", "Estonia"),
    ("EUR", "European Union"),
    ("FIN", "Finland"),
    ("FRA", "France"),
    ("GBR", "United Kingdom"),
    ("GGY", "Guernsey"),
    ("GHA", "Ghana"),
    ("GIB", "Gibraltar"),
    ("GIN", "Guinea"),
    ("GLP", "Guadeloupe"),
    ("GRC", "Greece"),
    ("GUF", "French Guiana"),
    ("HKG", "Hong Kong"),
    ("HUN", "Hungary"),
    ("IDN", "Indonesia"),
    ("IMN", "Isle of Man"),
    ("IND", "India"),
    ("IRL", "Ireland"),
    ("ISL", "Iceland"),
    ("ISR", "Israel"),
    ("ITA", "Italy"),
    ("JAM", "Jamaica"),
    ("JEY", "Jersey"),
    ("JPN", "Japan"),
    ("KAZ", "Kazakhstan"),
    ("KHM", "Cambodia"),
    ("KOR", "South Korea"),
    ("LBN", "Lebanon"),
    ("LBR", "Liberia"),
    ("LTU", "Lithuania"),
    ("LUX", "Luxembourg"),
    ("MAC", "Macao"),
    ("MAR", "Morocco"),
    ("MEX", "Mexico"),
    ("MKD", "North Macedonia"),
    ("MYS", "Malaysia"),
    ("NGA", "Nigeria"),
    ("NLD", "Netherlands"),
    ("NOR", "Norway"),
    ("NZL", "New Zealand"),
    ("PAK", "Pakistan"),
    ("PHL", "Philippines"),
    ("POL", "Poland"),
    ("PYF", "French Polynesia"),
    ("QAT", "Qatar"),
    ("REU", "Réunion"),
    ("ROU", "Romania"),
    ("RUS", "Russia"),
    ("SAU", "Saudi Arabia"),
    ("SGP", "Singapore"),
    ("SSD", "South Sudan"),
    ("SWE", "Sweden"),
    ("SWZ", "Eswatini"),
    ("SYR", "Syria"),
    ("THA", "Thailand"),
    ("TUR", "Turkey"),
    ("TWN", "Taiwan"),
    ("USA", "United States"),
    ("UZB", "Uzbekistan"),
    ("VNM", "Vietnam"),
    ("WLF", "Wallis and Futuna"),
    ("XKX", "Kosovo"),
    ("ZAF", "South Africa"),
];

/// Codes treated as euro-denominated by the currency guess.
const EUROZONE: &[&str] = &[
    "AUT", "BEL", "CYP", "EST", "FIN", "FRA", "DEU", "GRC", "IRL", "ITA", "LVA", "LTU", "LUX",
    "MLT", "NLD", "PRT", "SVK", "SVN", "ESP", "EUR",
];

const DERIVED_CITIES: &[&str] = &["Capital City", "Port City", "Industrial City"];
const DERIVED_REGIONS: &[&str] = &["Region A", "Region B", "Region C"];

/// Read-only lookup over the static country data.
#[derive(Debug)]
pub struct CountryCatalog {
    profiles: HashMap<&'static str, CountryProfile>,
    names: HashMap<&'static str, &'static str>,
}

impl CountryCatalog {
    /// Shared instance, built on first use and immutable afterwards.
    pub fn global() -> &'static CountryCatalog {
        static CATALOG: OnceLock<CountryCatalog> = OnceLock::new();
        CATALOG.get_or_init(CountryCatalog::new)
    }

    pub fn new() -> Self {
        let profiles = PROFILES
            .iter()
            .map(|(code, name, currency, banks)| {
                let profile = CountryProfile {
                    code: (*code).to_string(),
                    display_name: (*name).to_string(),
                    currency_code: (*currency).to_string(),
                    known_banks: banks
                        .iter()
                        .map(|(bank, swift)| BankDefinition::new(*bank, *swift))
                        .collect(),
                    city_names: Vec::new(),
                    region_names: Vec::new(),
                };
                (*code, profile)
            })
            .collect();
        let names = COUNTRY_NAMES.iter().copied().collect();
        Self { profiles, names }
    }

    /// Pure catalog read; `None` for codes without a full profile.
    pub fn lookup(&self, code: &str) -> Option<&CountryProfile> {
        self.profiles.get(code)
    }

    /// Display name from the name map, falling back to the raw code.
    pub fn display_name(&self, code: &str) -> String {
        self.names
            .get(code)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| code.to_string())
    }

    /// Catalog banks for a country, or the generic fallback trio when the
    /// country has no explicit bank list.
    pub fn banks_for_country(&self, code: &str) -> Vec<BankDefinition> {
        match self.lookup(code) {
            Some(profile) if !profile.known_banks.is_empty() => profile.known_banks.clone(),
            _ => self.generic_banks(code),
        }
    }

    /// Profile used to serve a request: a catalog hit, or a derived profile
    /// synthesized on the fly for unknown codes.
    pub fn profile_for(&self, code: &str) -> CountryProfile {
        if let Some(profile) = self.lookup(code) {
            return profile.clone();
        }
        CountryProfile {
            code: code.to_string(),
            display_name: self.display_name(code),
            currency_code: guess_currency(code).to_string(),
            known_banks: self.generic_banks(code),
            city_names: DERIVED_CITIES.iter().map(|c| (*c).to_string()).collect(),
            region_names: DERIVED_REGIONS.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    /// `(code, display name)` pairs for every known code, sorted by name.
    pub fn available_countries(&self) -> Vec<(String, String)> {
        let mut countries: Vec<(String, String)> = self
            .names
            .iter()
            .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
            .collect();
        countries.sort_by(|a, b| a.1.cmp(&b.1));
        countries
    }

    fn generic_banks(&self, code: &str) -> Vec<BankDefinition> {
        let name = self.display_name(code);
        vec![
            BankDefinition::new(format!("Bank of {name}"), format!("BO{code}XXXX")),
            BankDefinition::new(format!("National Bank of {name}"), format!("NB{code}XXXX")),
            BankDefinition::new(format!("{name} Commercial Bank"), format!("CB{code}XXXX")),
        ]
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort currency heuristic for codes without an explicit profile.
pub fn guess_currency(code: &str) -> &'static str {
    if EUROZONE.contains(&code) {
        return "EUR";
    }
    if code == "USA" || code == "ECU" {
        return "USD";
    }
    if code == "GBR" || code == "GGY" || code == "JEY" || code == "IMN" {
        return "GBP";
    }
    "USD"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_profiled_countries() {
        let catalog = CountryCatalog::global();
        let ireland = catalog.lookup("IRL").expect("IRL profile");
        assert_eq!(ireland.display_name, "Ireland");
        assert_eq!(ireland.currency_code, "EUR");
        assert_eq!(ireland.known_banks.len(), 3);
    }

    #[test]
    fn lookup_misses_unprofiled_codes() {
        assert!(CountryCatalog::global().lookup("ZZZ").is_none());
    }

    #[test]
    fn derived_profile_uses_generic_banks_and_vocabulary() {
        let profile = CountryCatalog::global().profile_for("ZZZ");
        assert_eq!(profile.display_name, "ZZZ");
        assert_eq!(profile.currency_code, "USD");
        assert_eq!(profile.known_banks.len(), 3);
        assert_eq!(profile.known_banks[0].name, "Bank of ZZZ");
        assert_eq!(profile.known_banks[0].swift_code, "BOZZZXXXX");
        assert_eq!(profile.city_names.len(), 3);
        assert_eq!(profile.region_names.len(), 3);
    }

    #[test]
    fn derived_profile_resolves_known_names() {
        let profile = CountryCatalog::global().profile_for("NOR");
        assert_eq!(profile.display_name, "Norway");
        assert_eq!(profile.known_banks[0].name, "Bank of Norway");
    }

    #[test]
    fn currency_guess_covers_the_policy_branches() {
        assert_eq!(guess_currency("CYP"), "EUR");
        assert_eq!(guess_currency("ECU"), "USD");
        assert_eq!(guess_currency("JEY"), "GBP");
        assert_eq!(guess_currency("JPN"), "USD");
    }

    #[test]
    fn available_countries_is_sorted_by_name() {
        let countries = CountryCatalog::global().available_countries();
        assert!(countries.len() > 80);
        let names: Vec<&String> = countries.iter().map(|(_, name)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
