//! Bank eligibility resolution.

use std::collections::BTreeSet;

use payeeforge_core::BankDefinition;
use tracing::debug;

/// Resolve the bank set a request may draw from.
///
/// Candidates are the profile banks with custom banks appended last,
/// deduplicated by SWIFT code. A non-empty selection filters candidates by
/// SWIFT membership; a selection that matches nothing (a stale selection
/// after a country change, typically) is discarded and the full candidate
/// set is returned instead. The result is never empty as long as the
/// candidates are non-empty.
pub fn resolve_eligible_banks(
    profile_banks: &[BankDefinition],
    selected_swift_codes: &BTreeSet<String>,
    custom_banks: &[BankDefinition],
) -> Vec<BankDefinition> {
    let mut candidates: Vec<BankDefinition> = profile_banks.to_vec();
    for custom in custom_banks {
        if !candidates.iter().any(|bank| bank.swift_code == custom.swift_code) {
            candidates.push(custom.clone());
        }
    }

    if selected_swift_codes.is_empty() {
        return candidates;
    }

    let filtered: Vec<BankDefinition> = candidates
        .iter()
        .filter(|bank| selected_swift_codes.contains(&bank.swift_code))
        .cloned()
        .collect();
    if filtered.is_empty() {
        debug!(
            selected = selected_swift_codes.len(),
            candidates = candidates.len(),
            "bank selection matched nothing, falling back to all candidates"
        );
        return candidates;
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_banks() -> Vec<BankDefinition> {
        vec![
            BankDefinition::new("Bank of Ireland", "BOFIIE2D"),
            BankDefinition::new("AIB", "AIBKIE2D"),
            BankDefinition::new("Ulster Bank", "ULSBIE2D"),
        ]
    }

    fn selection<const N: usize>(codes: [&str; N]) -> BTreeSet<String> {
        codes.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn empty_selection_returns_all_candidates() {
        let eligible = resolve_eligible_banks(&catalog_banks(), &BTreeSet::new(), &[]);
        assert_eq!(eligible.len(), 3);
    }

    #[test]
    fn selection_filters_by_swift_code() {
        let eligible =
            resolve_eligible_banks(&catalog_banks(), &selection(["AIBKIE2D"]), &[]);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "AIB");
    }

    #[test]
    fn unmatched_selection_falls_back_to_all_candidates() {
        let eligible =
            resolve_eligible_banks(&catalog_banks(), &selection(["NWBKGB2L"]), &[]);
        assert_eq!(eligible.len(), 3);
    }

    #[test]
    fn custom_banks_are_appended_last() {
        let custom = vec![BankDefinition::new("Fixture Credit Union", "FIXTIE2D")];
        let eligible = resolve_eligible_banks(&catalog_banks(), &BTreeSet::new(), &custom);
        assert_eq!(eligible.len(), 4);
        assert_eq!(eligible[3].swift_code, "FIXTIE2D");
    }

    #[test]
    fn duplicate_custom_swift_is_unioned_not_doubled() {
        let custom = vec![BankDefinition::new("Shadow AIB", "AIBKIE2D")];
        let eligible = resolve_eligible_banks(&catalog_banks(), &BTreeSet::new(), &custom);
        assert_eq!(eligible.len(), 3);
        let aib_entries = eligible
            .iter()
            .filter(|bank| bank.swift_code == "AIBKIE2D")
            .count();
        assert_eq!(aib_entries, 1);
    }

    #[test]
    fn selection_can_target_a_custom_bank() {
        let custom = vec![BankDefinition::new("Fixture Credit Union", "FIXTIE2D")];
        let eligible =
            resolve_eligible_banks(&catalog_banks(), &selection(["FIXTIE2D"]), &custom);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Fixture Credit Union");
    }
}
