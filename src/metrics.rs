//! Lookup metrics and observability.
//!
//! Each facade carries its own counters (a process can host several
//! independent facades). Counters are observational only: resolution
//! never reads them, so repeated lookups under the same override and
//! host locale stay deterministic.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-facade lookup counters.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// String lookups attempted through the facade
    lookups: AtomicUsize,

    /// Resolutions decided by the application override
    override_hits: AtomicUsize,

    /// Resolutions where an alias rule matched the host locale
    alias_resolutions: AtomicUsize,

    /// Resolutions where the host locale matched a declared language exactly
    exact_resolutions: AtomicUsize,

    /// Resolutions that fell back to the primary language
    primary_fallbacks: AtomicUsize,

    /// Lookups that failed with a missing key
    failed_lookups: AtomicUsize,
}

impl LookupMetrics {
    pub(crate) fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_override_hit(&self) {
        self.override_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_alias_resolution(&self) {
        self.alias_resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_exact_resolution(&self) {
        self.exact_resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_primary_fallback(&self) {
        self.primary_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_lookup(&self) {
        self.failed_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// String lookups attempted so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Resolutions decided by the application override.
    pub fn override_hits(&self) -> usize {
        self.override_hits.load(Ordering::Relaxed)
    }

    /// Resolutions where an alias rule matched the host locale.
    pub fn alias_resolutions(&self) -> usize {
        self.alias_resolutions.load(Ordering::Relaxed)
    }

    /// Resolutions where the host locale was a declared language.
    pub fn exact_resolutions(&self) -> usize {
        self.exact_resolutions.load(Ordering::Relaxed)
    }

    /// Resolutions that fell back to the primary language.
    pub fn primary_fallbacks(&self) -> usize {
        self.primary_fallbacks.load(Ordering::Relaxed)
    }

    /// Lookups that failed with a missing key.
    pub fn failed_lookups(&self) -> usize {
        self.failed_lookups.load(Ordering::Relaxed)
    }

    /// Snapshot the counters into a report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let failed = self.failed_lookups();
        let lookup_success_rate = if lookups > 0 {
            ((lookups - failed) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            override_hits: self.override_hits(),
            alias_resolutions: self.alias_resolutions(),
            exact_resolutions: self.exact_resolutions(),
            primary_fallbacks: self.primary_fallbacks(),
            failed_lookups: failed,
            lookup_success_rate,
        }
    }
}

/// Point-in-time snapshot of a facade's lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// String lookups attempted
    pub lookups: usize,

    /// Resolutions decided by the application override
    pub override_hits: usize,

    /// Resolutions via an alias rule
    pub alias_resolutions: usize,

    /// Resolutions via an exact language match
    pub exact_resolutions: usize,

    /// Resolutions that fell back to the primary language
    pub primary_fallbacks: usize,

    /// Lookups that failed with a missing key
    pub failed_lookups: usize,

    /// Lookup success rate as a percentage (0-100)
    pub lookup_success_rate: f64,
}
