// ============================================================================
// Formatter Cache
// Shared number formatters keyed by locale and options
// ============================================================================

use super::number_formatter::{FormatOptions, NumberFormatter};
use crate::domain::Locale;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FormatterKey {
    locale: Locale,
    options: FormatOptions,
}

/// Cache of [`NumberFormatter`]s keyed by `(locale, options)`.
///
/// Owned by whoever builds the inputs and shared through `Arc`; entries live
/// until [`FormatterCache::invalidate`] or [`FormatterCache::clear`].
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: RwLock<HashMap<FormatterKey, Arc<NumberFormatter>>>,
}

impl FormatterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatter for `(locale, options)`, creating it on first use.
    pub fn get(&self, locale: Locale, options: FormatOptions) -> Arc<NumberFormatter> {
        let key = FormatterKey { locale, options };

        if let Some(formatter) = self.formatters.read().get(&key) {
            return Arc::clone(formatter);
        }

        let mut formatters = self.formatters.write();
        let formatter = formatters.entry(key).or_insert_with(|| {
            tracing::trace!("Creating number formatter for {} {:?}", locale, options);
            Arc::new(NumberFormatter::new(locale, options))
        });
        Arc::clone(formatter)
    }

    /// Drop every formatter of `locale`. Returns how many were removed.
    pub fn invalidate(&self, locale: Locale) -> usize {
        let mut formatters = self.formatters.write();
        let before = formatters.len();
        formatters.retain(|key, _| key.locale != locale);
        before - formatters.len()
    }

    /// Drop every formatter.
    pub fn clear(&self) {
        self.formatters.write().clear();
    }

    pub fn len(&self) -> usize {
        self.formatters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.read().is_empty()
    }
}
