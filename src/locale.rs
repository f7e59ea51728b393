//! Host-locale detection.
//!
//! The facade never reads the environment directly; it asks an injected
//! [`LocaleSource`] for the host's best-guess locale, at most once per
//! resolution. Applications pick the OS-backed [`SystemLocale`], a
//! [`FixedLocale`] for tests and embedded environments, or any closure.

/// A best-guess host locale query.
///
/// Implementations return a single locale string (e.g. `"en-US"`) or
/// `None` when the host environment reports nothing usable.
pub trait LocaleSource: Send + Sync {
    fn locale(&self) -> Option<String>;
}

/// OS-reported locale via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A locale source that always reports the same value.
#[derive(Debug, Clone)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    /// Always report `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// Report no locale at all, as on hosts without locale support.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

impl<F> LocaleSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn locale(&self) -> Option<String> {
        self()
    }
}
