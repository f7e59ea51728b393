//! Error types for table construction and string lookup.

use thiserror::Error;

/// Errors produced by table construction, validation, and string lookup.
///
/// The two lookup variants (`LanguageNotInTable`, `KeyNotInDictionary`)
/// are programmer-error-class failures: a well-behaved caller resolves a
/// language with `get_language` before looking strings up, so neither is
/// expected under normal interaction. They carry the offending
/// identifiers so callers can tell which precondition was violated.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The language is not a top-level entry of the string table.
    #[error("language '{language}' not found in localization table; use get_language to resolve available languages")]
    LanguageNotInTable { language: String },

    /// The language exists but has no entry for the requested key.
    #[error("key '{key}' not found in localization table for language '{language}'")]
    KeyNotInDictionary { language: String, key: String },

    /// A string table must declare at least one language.
    #[error("localization table declares no languages")]
    EmptyTable,

    /// The same language code was declared twice.
    #[error("language '{language}' declared more than once")]
    DuplicateLanguage { language: String },

    /// An alias rule points at a language the table does not declare.
    #[error("alias pattern '{pattern}' targets unknown language '{target}'")]
    UnknownAliasTarget { pattern: String, target: String },

    /// The requested primary language is not declared in the table.
    #[error("primary language '{language}' is not declared in the table")]
    UnknownPrimaryLanguage { language: String },

    /// An alias pattern failed to compile.
    #[error("invalid alias pattern '{pattern}'")]
    InvalidAliasPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A JSON table document did not have the expected shape.
    #[error("invalid localization table: {reason}")]
    InvalidTable { reason: String },
}
