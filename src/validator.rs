//! Table quality validation.
//!
//! Table construction intentionally does not require every language to
//! carry the same key set; this module provides the opt-in check.
//! Applications typically run it at startup or in a test so a missing
//! translation is caught before a lookup fails at render time.

use serde::Serialize;

use crate::table::StringTable;

/// Validation report containing errors and warnings about a string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that will fail lookups at runtime
    pub errors: Vec<String>,

    /// Non-critical issues worth reviewing
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for string-table consistency.
pub struct TableValidator;

impl TableValidator {
    /// Check a table against the key-set-congruence invariant.
    ///
    /// The first declared language is treated as the reference key set:
    /// - a language missing one of its keys is an error (the lookup for
    ///   that pair will fail);
    /// - a language carrying keys the reference lacks is a warning;
    /// - empty string values are warnings;
    /// - a declared language whose code an alias rule remaps to a
    ///   different language is a warning (the table entry is unreachable
    ///   through `get_language`).
    pub fn validate(table: &StringTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        let languages = table.languages();
        let reference = &languages[0];

        for language in &languages[1..] {
            for key in reference.keys() {
                if language.get(key).is_none() {
                    report.errors.push(format!(
                        "language '{}' is missing key '{}' declared by '{}'",
                        language.code(),
                        key,
                        reference.code()
                    ));
                }
            }
            for key in language.keys() {
                if reference.get(key).is_none() {
                    report.warnings.push(format!(
                        "language '{}' has extra key '{}' not declared by '{}'",
                        language.code(),
                        key,
                        reference.code()
                    ));
                }
            }
        }

        for language in languages {
            for key in language.keys() {
                if language.get(key).is_some_and(str::is_empty) {
                    report.warnings.push(format!(
                        "language '{}' has empty string for key '{}'",
                        language.code(),
                        key
                    ));
                }
            }
        }

        for language in languages {
            if let Some(resolved) = table.get_language(language.code()) {
                if resolved != language.code() {
                    report.warnings.push(format!(
                        "language '{}' is remapped to '{}' by an alias rule and cannot be reached through get_language",
                        language.code(),
                        resolved
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::AliasRule;
    use crate::table::LanguageStrings;

    fn table(languages: Vec<LanguageStrings>, aliases: Vec<AliasRule>) -> StringTable {
        StringTable::new(languages, aliases).unwrap()
    }

    // ==================== Congruence Tests ====================

    #[test]
    fn test_validate_congruent_table_is_clean() {
        let table = table(
            vec![
                LanguageStrings::new("en", [("hello", "Hello"), ("bye", "Bye")]),
                LanguageStrings::new("ja", [("hello", "こんにちは"), ("bye", "さようなら")]),
            ],
            vec![],
        );
        assert!(TableValidator::validate(&table).is_clean());
    }

    #[test]
    fn test_validate_missing_key_is_error() {
        let table = table(
            vec![
                LanguageStrings::new("en", [("hello", "Hello"), ("bye", "Bye")]),
                LanguageStrings::new("ja", [("hello", "こんにちは")]),
            ],
            vec![],
        );
        let report = TableValidator::validate(&table);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'ja'"));
        assert!(report.errors[0].contains("'bye'"));
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        let table = table(
            vec![
                LanguageStrings::new("en", [("hello", "Hello")]),
                LanguageStrings::new("ja", [("hello", "こんにちは"), ("extra", "おまけ")]),
            ],
            vec![],
        );
        let report = TableValidator::validate(&table);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("extra key"));
    }

    // ==================== Value Tests ====================

    #[test]
    fn test_validate_empty_value_is_warning() {
        let table = table(
            vec![LanguageStrings::new("en", [("hello", "")])],
            vec![],
        );
        let report = TableValidator::validate(&table);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("empty string"));
    }

    // ==================== Alias Shadowing Tests ====================

    #[test]
    fn test_validate_remapped_language_is_warning() {
        let table = table(
            vec![
                LanguageStrings::new("en", [("hello", "Hello")]),
                LanguageStrings::new("ja", [("hello", "こんにちは")]),
            ],
            vec![AliasRule::new("^en$", "ja").unwrap()],
        );
        let report = TableValidator::validate(&table);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("remapped"));
    }

    #[test]
    fn test_validate_self_alias_is_not_flagged() {
        // A rule mapping regional variants onto the language itself also
        // matches the bare code; that resolves to the same language and
        // is not shadowing.
        let table = table(
            vec![LanguageStrings::new("en", [("hello", "Hello")])],
            vec![AliasRule::new("^en", "en").unwrap()],
        );
        assert!(TableValidator::validate(&table).is_clean());
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_serializes() {
        let mut report = ValidationReport::new();
        report.warnings.push("test warning".to_string());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("test warning"));
    }
}
