use std::cmp::Ordering;

use proptest::prelude::*;
use version_resolver::version::{Version, get_latest, normalize, parse, sort};

/// Version strings in the spellings the build pipelines publish, without build metadata
fn core_version_string() -> impl Strategy<Value = String> {
    "[vV]?[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?(-((RC|rc|beta|BETA|alpha)[0-9]?|SNAPSHOT))?"
}

fn version_string() -> impl Strategy<Value = String> {
    (core_version_string(), "(\\+[a-z0-9]{1,4})?").prop_map(|(core, build)| core + &build)
}

/// Catalog entries: mostly versions, some junk
fn catalog_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => version_string(),
        1 => "[a-z.x-]{0,6}",
    ]
}

fn parsed(raw: &str) -> Version {
    parse(raw).parsed.expect("strategy produces valid versions")
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in any::<String>()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_for_version_spellings(raw in version_string()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn parse_preserves_raw_string(raw in any::<String>()) {
        prop_assert_eq!(parse(&raw).raw, raw);
    }

    #[test]
    fn version_spellings_parse(raw in version_string()) {
        prop_assert!(parse(&raw).is_valid());
    }

    #[test]
    fn compare_is_antisymmetric(a in version_string(), b in version_string()) {
        let (a, b) = (parsed(&a), parsed(&b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in version_string(),
        b in version_string(),
        c in version_string(),
    ) {
        let (a, b, c) = (parsed(&a), parsed(&b), parsed(&c));
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a >= b && b >= c {
            prop_assert!(a >= c);
        }
        if a == b && b == c {
            prop_assert_eq!(a.cmp(&c), Ordering::Equal);
        }
    }

    #[test]
    fn sort_keeps_every_entry_and_puts_invalid_last(
        raws in prop::collection::vec(catalog_entry(), 0..12),
        descending in any::<bool>(),
    ) {
        let sorted = sort(&raws, descending);

        let mut expected_all = raws.clone();
        let mut actual_all = sorted.clone();
        expected_all.sort();
        actual_all.sort();
        prop_assert_eq!(actual_all, expected_all);

        let invalid: Vec<&String> = raws.iter().filter(|r| !parse(r).is_valid()).collect();
        let valid_count = raws.len() - invalid.len();
        prop_assert!(sorted[..valid_count].iter().all(|r| parse(r).is_valid()));
        prop_assert_eq!(sorted[valid_count..].iter().collect::<Vec<_>>(), invalid);
    }

    #[test]
    fn sort_keeps_equal_versions_in_input_order(
        cores in prop::collection::vec(core_version_string(), 0..12),
        descending in any::<bool>(),
    ) {
        // Unique build metadata tags each entry with its input position
        let raws: Vec<String> = cores
            .iter()
            .enumerate()
            .map(|(i, core)| format!("{core}+{i}"))
            .collect();
        let input_position = |raw: &String| raws.iter().position(|r| r == raw);

        let sorted = sort(&raws, descending);

        for (i, a) in sorted.iter().enumerate() {
            for b in &sorted[i + 1..] {
                if parsed(a) == parsed(b) {
                    prop_assert!(input_position(a) < input_position(b));
                }
            }
        }
    }

    #[test]
    fn get_latest_is_idempotent(raws in prop::collection::vec(catalog_entry(), 0..12)) {
        if let Some(latest) = get_latest(&raws) {
            prop_assert!(parse(&latest).is_valid());
            prop_assert_eq!(get_latest(&[latest.clone()]), Some(latest));
        }
    }

    #[test]
    fn get_latest_is_none_only_without_valid_entries(
        raws in prop::collection::vec(catalog_entry(), 0..12),
    ) {
        let any_valid = raws.iter().any(|r| parse(r).is_valid());
        prop_assert_eq!(get_latest(&raws).is_some(), any_valid);
    }
}
