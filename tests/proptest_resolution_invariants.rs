//! Property-based invariant tests for language resolution and lookup.
//!
//! Verifies structural guarantees of the resolver, the table, and the
//! facade:
//!
//! 1. resolve_language is total: never panics for arbitrary input
//! 2. resolve_language is deterministic: same input → same result
//! 3. When any alias rule matches, the first matching rule's target wins
//! 4. Without a matching alias, a declared language resolves to itself
//! 5. Without a matching alias, an undeclared language resolves to None
//! 6. get_string returns the exact stored string for every declared pair
//! 7. The facade's resolved language is always a declared language
//! 8. Repeated lookups under fixed inputs are idempotent

use proptest::prelude::*;

use l10n_table::{
    resolve_language, AliasRule, FixedLocale, LanguageStrings, Localization, StringTable,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn known_codes() -> Vec<String> {
    vec!["en".to_string(), "ja".to_string(), "zh-Hans".to_string()]
}

fn sample_rules() -> Vec<AliasRule> {
    vec![
        AliasRule::new("^en-", "en").unwrap(),
        AliasRule::new("^zh", "zh-Hans").unwrap(),
    ]
}

/// Strategy for small language/key identifiers
fn ident() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Strategy for arbitrary requested locale strings, printable unicode
fn requested() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

// ═════════════════════════════════════════════════════════════════════
// 1-2. Totality and determinism
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolver_is_total_and_deterministic(input in requested()) {
        let known = known_codes();
        let rules = sample_rules();
        let first = resolve_language(&input, &rules, known.iter().map(String::as_str));
        let second = resolve_language(&input, &rules, known.iter().map(String::as_str));
        prop_assert_eq!(first, second);
        if let Some(resolved) = first {
            prop_assert!(known.iter().any(|code| code == resolved));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// 3. First matching alias rule wins
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn first_matching_rule_wins(input in requested()) {
        let known = known_codes();
        let rules = sample_rules();
        let expected = rules.iter().find(|rule| rule.matches(&input)).map(AliasRule::target);
        if expected.is_some() {
            let resolved = resolve_language(&input, &rules, known.iter().map(String::as_str));
            prop_assert_eq!(resolved, expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// 4-5. Exact-match fallthrough
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unaliased_input_resolves_by_membership(input in requested()) {
        let known = known_codes();
        let rules = sample_rules();
        if rules.iter().all(|rule| !rule.matches(&input)) {
            let resolved = resolve_language(&input, &rules, known.iter().map(String::as_str));
            if known.iter().any(|code| *code == input) {
                prop_assert_eq!(resolved, Some(input.as_str()));
            } else {
                prop_assert_eq!(resolved, None);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// 6. Lookup exactness over generated tables
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn get_string_returns_stored_string(
        codes in proptest::collection::hash_set(ident(), 1..4),
        keys in proptest::collection::hash_set(ident(), 1..4),
        salt in "\\PC{0,12}",
    ) {
        let languages: Vec<LanguageStrings> = codes
            .iter()
            .map(|code| {
                LanguageStrings::new(
                    code.clone(),
                    keys.iter().map(|key| {
                        (key.clone(), format!("{}:{}:{}", code, key, salt))
                    }),
                )
            })
            .collect();
        let table = StringTable::new(languages, vec![]).unwrap();

        for code in &codes {
            for key in &keys {
                let expected = format!("{}:{}:{}", code, key, salt);
                prop_assert_eq!(table.get_string(code, key).unwrap(), expected.as_str());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// 7-8. Facade resolution stays in the table and is idempotent
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn facade_resolution_is_declared_and_idempotent(host in requested()) {
        let table = StringTable::new(
            vec![
                LanguageStrings::new("en", [("hello", "Hello")]),
                LanguageStrings::new("ja", [("hello", "こんにちは")]),
            ],
            vec![AliasRule::new("^en-", "en").unwrap()],
        )
        .unwrap();
        let localization =
            Localization::with_locale_source(table, Some("en"), FixedLocale::new(host)).unwrap();

        let first = localization.current_language().to_string();
        prop_assert!(localization.table().language_codes().any(|code| code == first));

        for _ in 0..3 {
            prop_assert_eq!(localization.current_language(), first.as_str());
            prop_assert_eq!(
                localization.string("hello").unwrap(),
                localization.table().get_string(&first, "hello").unwrap()
            );
        }
    }
}
