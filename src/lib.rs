//! Static string-table localization with alias-based language resolution.
//!
//! This crate resolves a "current language" (from an application
//! override, the host locale, or a fallback) against a fixed table of
//! per-language string dictionaries, and looks strings up by key.
//!
//! # Architecture
//!
//! - `resolve`: alias rules and the pure language-resolution function
//! - `table`: the immutable language -> key -> string table
//! - `locale`: injected host-locale sources
//! - `localization`: the facade tying table, override, and locale together
//! - `validator`: opt-in key-set consistency checking
//! - `metrics`: per-facade lookup observability
//!
//! # Example
//!
//! ```rust
//! use l10n_table::{AliasRule, FixedLocale, LanguageStrings, Localization, StringTable};
//!
//! let table = StringTable::new(
//!     vec![
//!         LanguageStrings::new("en", [("hello", "Hello")]),
//!         LanguageStrings::new("ja", [("hello", "こんにちは")]),
//!     ],
//!     vec![AliasRule::new("^en-", "en")?],
//! )?;
//!
//! // The host reports "en-US"; the alias rule maps it onto "en".
//! let localization =
//!     Localization::with_locale_source(table, Some("en"), FixedLocale::new("en-US"))?;
//! assert_eq!(localization.string("hello")?, "Hello");
//!
//! // The application pins Japanese; the next lookup sees it.
//! localization.set_language(Some("ja"))?;
//! assert_eq!(localization.string("hello")?, "こんにちは");
//! # Ok::<(), l10n_table::LocalizationError>(())
//! ```

pub mod error;
pub mod locale;
pub mod localization;
pub mod metrics;
pub mod resolve;
pub mod table;
pub mod validator;

pub use error::LocalizationError;
pub use locale::{FixedLocale, LocaleSource, SystemLocale};
pub use localization::{Localization, Localized};
pub use metrics::{LookupMetrics, MetricsReport};
pub use resolve::{resolve_language, AliasRule};
pub use table::{LanguageStrings, StringTable};
pub use validator::{TableValidator, ValidationReport};
