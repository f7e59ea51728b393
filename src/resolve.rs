//! Language resolution: mapping arbitrary requested locale strings to
//! declared languages.
//!
//! Resolution is a pure function of its inputs. Alias rules are scanned
//! in declaration order and the first match wins; only when no rule
//! matches is the requested string checked against the declared language
//! set. Absence of a match is represented as `None`, never as an error.

use regex::Regex;

use crate::error::LocalizationError;

/// A rule remapping arbitrary input locale strings to a declared language.
///
/// Rules are evaluated in declaration order against the raw requested
/// string; the first rule whose pattern matches decides the language,
/// even when a later rule or an exact table entry would also match.
#[derive(Debug, Clone)]
pub struct AliasRule {
    pattern: Regex,
    target: String,
}

impl AliasRule {
    /// Compile an alias rule from a regex pattern and a target language code.
    ///
    /// # Errors
    /// Returns `LocalizationError::InvalidAliasPattern` if the pattern does
    /// not compile. Whether the target names a declared language is checked
    /// at table construction, not here.
    pub fn new(pattern: &str, target: impl Into<String>) -> Result<Self, LocalizationError> {
        let compiled = Regex::new(pattern).map_err(|source| {
            LocalizationError::InvalidAliasPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: compiled,
            target: target.into(),
        })
    }

    /// The pattern text this rule was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The declared language this rule resolves to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether this rule applies to the requested locale string.
    pub fn matches(&self, requested: &str) -> bool {
        self.pattern.is_match(requested)
    }
}

/// Resolve a requested locale string against alias rules and a set of
/// known languages.
///
/// 1. The first alias rule (in declaration order) whose pattern matches
///    `requested` wins, even if `requested` is itself a known language.
/// 2. Otherwise, if `requested` equals a known language, that language
///    is returned.
/// 3. Otherwise `None`.
///
/// The returned `&str` borrows from the rules or the known set, never
/// from `requested`, so the result outlives transient inputs such as a
/// freshly detected host locale.
pub fn resolve_language<'a>(
    requested: &str,
    aliases: &'a [AliasRule],
    known_languages: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    for rule in aliases {
        if rule.matches(requested) {
            return Some(rule.target());
        }
    }
    known_languages.into_iter().find(|&code| code == requested)
}
