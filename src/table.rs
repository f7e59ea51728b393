//! String table: the nested language -> key -> string dictionary.
//!
//! The table is the single source of truth for which languages exist.
//! Declaration order is preserved and is semantic: the first declared
//! language is the default primary language of a facade built on top of
//! this table. The table is never mutated after construction.

use std::collections::HashMap;

use tracing::debug;

use crate::error::LocalizationError;
use crate::resolve::{self, AliasRule};

/// One language's dictionary: a language code plus its key -> string map.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    code: String,
    strings: HashMap<String, String>,
}

impl LanguageStrings {
    /// Build a language dictionary from any iterator of (key, string) pairs.
    pub fn new<K, V>(code: impl Into<String>, strings: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            code: code.into(),
            strings: strings
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// The language code this dictionary belongs to.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Look up one key in this dictionary.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Iterate this dictionary's keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// Number of keys in this dictionary.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether this dictionary has no keys.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Immutable two-level string table with alias rules.
///
/// Owns the per-language dictionaries (in declaration order) and the
/// ordered alias rules. Offers exactly two lookups:
///
/// - [`get_language`](StringTable::get_language) resolves an arbitrary
///   requested locale string to a declared language (or `None`);
/// - [`get_string`](StringTable::get_string) fetches one string for an
///   already-resolved language, failing loudly when either level of the
///   lookup misses.
#[derive(Debug, Clone)]
pub struct StringTable {
    languages: Vec<LanguageStrings>,
    aliases: Vec<AliasRule>,
}

impl StringTable {
    /// Build a table from language dictionaries and alias rules.
    ///
    /// # Errors
    /// * `EmptyTable` if no languages are declared
    /// * `DuplicateLanguage` if a code appears twice
    /// * `UnknownAliasTarget` if a rule targets an undeclared language
    ///
    /// Key-set congruence across languages is deliberately not checked
    /// here; see [`TableValidator`](crate::validator::TableValidator).
    pub fn new(
        languages: Vec<LanguageStrings>,
        aliases: Vec<AliasRule>,
    ) -> Result<Self, LocalizationError> {
        if languages.is_empty() {
            return Err(LocalizationError::EmptyTable);
        }
        for (index, language) in languages.iter().enumerate() {
            if languages[..index].iter().any(|l| l.code == language.code) {
                return Err(LocalizationError::DuplicateLanguage {
                    language: language.code.clone(),
                });
            }
        }
        for rule in &aliases {
            if !languages.iter().any(|l| l.code == rule.target()) {
                return Err(LocalizationError::UnknownAliasTarget {
                    pattern: rule.pattern().to_string(),
                    target: rule.target().to_string(),
                });
            }
        }
        debug!(
            languages = languages.len(),
            aliases = aliases.len(),
            "constructed string table"
        );
        Ok(Self { languages, aliases })
    }

    /// Load a table from a JSON document of shape `{lang: {key: string}}`.
    ///
    /// Declaration order of the top-level entries is preserved, so the
    /// first language in the document becomes the default primary
    /// language of a facade built on this table.
    ///
    /// # Errors
    /// `InvalidTable` when the document is not a two-level object of
    /// strings, plus any error [`StringTable::new`] reports.
    pub fn from_json(json: &str, aliases: Vec<AliasRule>) -> Result<Self, LocalizationError> {
        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LocalizationError::InvalidTable {
                reason: e.to_string(),
            })?;
        let root = document
            .as_object()
            .ok_or_else(|| LocalizationError::InvalidTable {
                reason: "top level must be an object of languages".to_string(),
            })?;

        let mut languages = Vec::with_capacity(root.len());
        for (code, dictionary) in root {
            let entries = dictionary
                .as_object()
                .ok_or_else(|| LocalizationError::InvalidTable {
                    reason: format!("language '{}' must map to an object of strings", code),
                })?;
            let mut strings = HashMap::with_capacity(entries.len());
            for (key, value) in entries {
                let text = value
                    .as_str()
                    .ok_or_else(|| LocalizationError::InvalidTable {
                        reason: format!("value for '{}.{}' must be a string", code, key),
                    })?;
                strings.insert(key.clone(), text.to_string());
            }
            languages.push(LanguageStrings {
                code: code.clone(),
                strings,
            });
        }
        Self::new(languages, aliases)
    }

    /// Resolve an arbitrary requested locale string to a declared language.
    ///
    /// Delegates to [`resolve::resolve_language`] with this table's alias
    /// rules and language set. Returns `None` for unrecognized input;
    /// callers decide the fallback.
    pub fn get_language(&self, requested: &str) -> Option<&str> {
        resolve::resolve_language(requested, &self.aliases, self.language_codes())
    }

    /// Fetch the string stored for a (language, key) pair.
    ///
    /// Assumes `language` was already resolved via
    /// [`get_language`](StringTable::get_language); no alias resolution
    /// or fallback happens here.
    ///
    /// # Errors
    /// * `LanguageNotInTable` when `language` is not a top-level entry
    /// * `KeyNotInDictionary` when the language exists but lacks `key`
    pub fn get_string(&self, language: &str, key: &str) -> Result<&str, LocalizationError> {
        let entry = self
            .languages
            .iter()
            .find(|l| l.code == language)
            .ok_or_else(|| LocalizationError::LanguageNotInTable {
                language: language.to_string(),
            })?;
        entry
            .get(key)
            .ok_or_else(|| LocalizationError::KeyNotInDictionary {
                language: language.to_string(),
                key: key.to_string(),
            })
    }

    /// Declared language codes, in declaration order.
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }

    /// The per-language dictionaries, in declaration order.
    pub fn languages(&self) -> &[LanguageStrings] {
        &self.languages
    }

    /// The alias rules, in declaration order.
    pub fn aliases(&self) -> &[AliasRule] {
        &self.aliases
    }

    /// The first declared language code.
    pub fn first_language(&self) -> &str {
        // Construction rejects empty tables.
        &self.languages[0].code
    }

    /// Number of declared languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the table declares no languages (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
