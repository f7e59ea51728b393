//! Localization facade: current-language state plus string lookup.
//!
//! A [`Localization`] composes a [`StringTable`] with a primary-language
//! constant, an application-owned current-language override, and an
//! injected host-locale source. Consumers receive a clone of the handle
//! (clones share state through an `Arc`); the hosting application keeps
//! one clone as the single writer of the override.
//!
//! Every lookup re-runs language resolution from scratch. There is no
//! caching, so an override change is visible on the very next access
//! with no invalidation step.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::LocalizationError;
use crate::locale::{LocaleSource, SystemLocale};
use crate::metrics::{LookupMetrics, MetricsReport};
use crate::table::StringTable;

struct LocalizationInner {
    table: StringTable,
    primary: String,
    override_language: RwLock<Option<String>>,
    locale_source: Box<dyn LocaleSource>,
    metrics: LookupMetrics,
}

/// Shared localization handle.
///
/// Cheap to clone; all clones read and write the same override cell and
/// the same table. Dropping the last clone drops the shared state.
#[derive(Clone)]
pub struct Localization {
    inner: Arc<LocalizationInner>,
}

impl Localization {
    /// Build a facade over `table` using the OS locale for host detection.
    ///
    /// `primary` must be a declared language; `None` selects the table's
    /// first declared language as the ultimate fallback.
    ///
    /// # Errors
    /// `UnknownPrimaryLanguage` when `primary` names an undeclared language.
    pub fn new(table: StringTable, primary: Option<&str>) -> Result<Self, LocalizationError> {
        Self::with_locale_source(table, primary, SystemLocale)
    }

    /// Build a facade with an injected host-locale source.
    ///
    /// Use this in tests (with [`FixedLocale`](crate::locale::FixedLocale))
    /// or on hosts where `sys-locale` is not the right authority.
    pub fn with_locale_source(
        table: StringTable,
        primary: Option<&str>,
        locale_source: impl LocaleSource + 'static,
    ) -> Result<Self, LocalizationError> {
        let primary = match primary {
            Some(code) => {
                if !table.language_codes().any(|c| c == code) {
                    return Err(LocalizationError::UnknownPrimaryLanguage {
                        language: code.to_string(),
                    });
                }
                code.to_string()
            }
            None => table.first_language().to_string(),
        };
        debug!(primary = %primary, "constructed localization facade");
        Ok(Self {
            inner: Arc::new(LocalizationInner {
                table,
                primary,
                override_language: RwLock::new(None),
                locale_source: Box::new(locale_source),
                metrics: LookupMetrics::default(),
            }),
        })
    }

    /// Set or clear the current-language override.
    ///
    /// `Some(language)` pins resolution to that language until changed;
    /// `None` returns to host-locale detection. The hosting application
    /// is the single writer; lookups on any clone observe the new value
    /// on their next access.
    ///
    /// # Errors
    /// `LanguageNotInTable` when `language` is not declared in the table.
    pub fn set_language(&self, language: Option<&str>) -> Result<(), LocalizationError> {
        if let Some(code) = language {
            if !self.inner.table.language_codes().any(|c| c == code) {
                return Err(LocalizationError::LanguageNotInTable {
                    language: code.to_string(),
                });
            }
        }
        *self.inner.override_language.write() = language.map(str::to_string);
        debug!(language = ?language, "current-language override updated");
        Ok(())
    }

    /// The current override, if one is set.
    pub fn override_language(&self) -> Option<String> {
        self.inner.override_language.read().clone()
    }

    /// The currently resolved language.
    ///
    /// Override if set, else the host locale resolved through the table's
    /// alias rules, else the primary language. Recomputed on every call.
    pub fn current_language(&self) -> &str {
        self.resolved_language()
    }

    /// Look up the string for `key` in the currently resolved language.
    ///
    /// Resolution runs fresh on every call, so an override change is
    /// reflected immediately.
    ///
    /// # Errors
    /// `KeyNotInDictionary` when the resolved language has no entry for
    /// `key`. (`LanguageNotInTable` cannot occur here: resolution only
    /// produces declared languages.)
    pub fn string(&self, key: &str) -> Result<&str, LocalizationError> {
        self.inner.metrics.record_lookup();
        let language = self.resolved_language();
        self.inner.table.get_string(language, key).map_err(|err| {
            self.inner.metrics.record_failed_lookup();
            debug!(language = %language, key = %key, "string lookup failed");
            err
        })
    }

    /// Bind one key into a renderable unit.
    ///
    /// The returned [`Localized`] re-resolves the current language on
    /// every [`render`](Localized::render), so the same binding yields
    /// updated text after an override change.
    pub fn localized<'a>(&'a self, key: &'a str) -> Localized<'a> {
        Localized {
            localization: self,
            key,
        }
    }

    /// The underlying string table.
    pub fn table(&self) -> &StringTable {
        &self.inner.table
    }

    /// The configured primary (ultimate fallback) language.
    pub fn primary_language(&self) -> &str {
        &self.inner.primary
    }

    /// Live lookup counters for this facade.
    pub fn metrics(&self) -> &LookupMetrics {
        &self.inner.metrics
    }

    /// Snapshot of this facade's lookup metrics.
    pub fn metrics_report(&self) -> MetricsReport {
        self.inner.metrics.report()
    }

    /// The one resolution algorithm shared by `current_language`,
    /// `string` and `Localized::render`.
    fn resolved_language(&self) -> &str {
        let override_language = self.inner.override_language.read().clone();
        if let Some(code) = override_language {
            // set_language validated the code, so it maps back to a
            // table entry; resolution uses it verbatim, bypassing aliases.
            if let Some(language) = self.inner.table.language_codes().find(|&c| c == code) {
                self.inner.metrics.record_override_hit();
                return language;
            }
        }

        if let Some(host) = self.inner.locale_source.locale() {
            if let Some(language) = self.inner.table.get_language(&host) {
                if self.inner.table.aliases().iter().any(|r| r.matches(&host)) {
                    self.inner.metrics.record_alias_resolution();
                } else {
                    self.inner.metrics.record_exact_resolution();
                }
                debug!(host = %host, language = %language, "resolved host locale");
                return language;
            }
            debug!(host = %host, "host locale did not resolve, using primary");
        }

        self.inner.metrics.record_primary_fallback();
        &self.inner.primary
    }
}

impl fmt::Debug for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localization")
            .field("primary", &self.inner.primary)
            .field("override_language", &self.override_language())
            .field("languages", &self.inner.table.len())
            .finish()
    }
}

/// A single key bound for rendering.
///
/// The rendering layer calls [`render`](Localized::render) whenever it
/// needs the text; each call resolves the current language anew.
#[derive(Debug, Clone, Copy)]
pub struct Localized<'a> {
    localization: &'a Localization,
    key: &'a str,
}

impl<'a> Localized<'a> {
    /// The bound key.
    pub fn key(&self) -> &str {
        self.key
    }

    /// Resolve the current language and return this key's string.
    ///
    /// # Errors
    /// Propagates the facade's lookup error for an unknown key.
    pub fn render(&self) -> Result<&'a str, LocalizationError> {
        self.localization.string(self.key)
    }
}
