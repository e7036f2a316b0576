//! ThemeMemoizer: theme-partitioned cache for styleguide lookups

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use ahash::RandomState;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::MemoizeConfig;
use crate::key::CacheKey;
use crate::stats::MemoStats;

/// Resolved styles of a component, property name to value
pub type StyleMap = BTreeMap<String, String>;

type Namespace<V> = HashMap<CacheKey, V, RandomState>;

/// Memoized store of computed styleguide values, partitioned by theme
///
/// Entries never expire; they live until [`clear`](Self::clear) or
/// [`reset`](Self::reset). Compute functions run outside the lock, so a
/// compute function may itself resolve other components through the same
/// memoizer. Concurrent misses on one key may compute more than once; the
/// last store wins.
pub struct ThemeMemoizer<V = StyleMap> {
    /// theme -> (key -> value)
    themes: RwLock<HashMap<String, Namespace<V>, RandomState>>,

    /// Read on every `add`
    enabled: AtomicBool,

    stats: MemoStats,
}

impl<V: Clone> ThemeMemoizer<V> {
    /// Create an empty memoizer with memoization enabled
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create an empty memoizer configured by the host
    pub fn with_config(config: &MemoizeConfig) -> Self {
        Self::with_enabled(config.memoize.is_enabled())
    }

    fn with_enabled(enabled: bool) -> Self {
        Self {
            themes: RwLock::new(HashMap::with_hasher(RandomState::new())),
            enabled: AtomicBool::new(enabled),
            stats: MemoStats::new(),
        }
    }

    /// Turn storing on or off; takes effect on the next `add`
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            debug!(enabled, "memoization toggled");
        }
    }

    /// Whether `add` currently stores values
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Store a value for a theme
    ///
    /// # Arguments
    /// * `theme` - Theme namespace
    /// * `key` - Derived key, or `None` for an uncacheable lookup
    /// * `value` - Value to store, replacing any previous one
    ///
    /// No-op when memoization is disabled or `key` is `None`.
    pub fn add(&self, theme: &str, key: Option<CacheKey>, value: V) {
        if !self.is_enabled() {
            self.stats.record_skipped();
            return;
        }
        let Some(key) = key else {
            self.stats.record_uncacheable();
            return;
        };

        let mut themes = self.themes.write();
        match themes.get_mut(theme) {
            Some(namespace) => {
                namespace.insert(key, value);
            }
            None => {
                let mut namespace = Namespace::with_hasher(RandomState::new());
                namespace.insert(key, value);
                themes.insert(theme.to_string(), namespace);
            }
        }
        self.stats.record_insert();
    }

    /// Look up a stored value
    ///
    /// # Arguments
    /// * `theme` - Theme namespace
    /// * `key` - Derived key, or `None` for an uncacheable lookup
    ///
    /// # Returns
    /// * `Option<V>` - Clone of the stored value; always `None` for the
    ///   no-key sentinel
    ///
    /// Looking up an unknown theme creates its (empty) namespace.
    pub fn fetch(&self, theme: &str, key: Option<CacheKey>) -> Option<V> {
        let Some(key) = key else {
            self.stats.record_uncacheable();
            return None;
        };

        let lookup = {
            let themes = self.themes.read();
            themes
                .get(theme)
                .map(|namespace| namespace.get(&key).cloned())
        };

        let value = match lookup {
            Some(value) => value,
            None => {
                self.ensure_namespace(theme);
                None
            }
        };

        if value.is_some() {
            self.stats.record_hit();
            trace!(theme, %key, "memoizer hit");
        } else {
            self.stats.record_miss();
            trace!(theme, %key, "memoizer miss");
        }
        value
    }

    /// Return the stored value, or compute, store and return it
    ///
    /// `compute` runs at most once per call and only on a miss.
    pub fn fetch_or_create<F>(&self, theme: &str, key: Option<CacheKey>, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.fetch(theme, key) {
            return value;
        }
        let value = compute();
        self.add(theme, key, value.clone());
        value
    }

    /// Like [`fetch_or_create`](Self::fetch_or_create) with an optional
    /// compute function
    ///
    /// # Returns
    /// * `None` on a miss when no compute function is supplied; nothing is
    ///   stored in that case
    pub fn fetch_or_compute<F>(
        &self,
        theme: &str,
        key: Option<CacheKey>,
        compute: Option<F>,
    ) -> Option<V>
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.fetch(theme, key) {
            return Some(value);
        }
        let compute = compute?;
        let value = compute();
        self.add(theme, key, value.clone());
        Some(value)
    }

    /// Fallible [`fetch_or_create`](Self::fetch_or_create)
    ///
    /// An error from `compute` is returned unchanged and nothing is stored.
    pub fn try_fetch_or_create<F, E>(
        &self,
        theme: &str,
        key: Option<CacheKey>,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.fetch(theme, key) {
            return Ok(value);
        }
        let value = compute()?;
        self.add(theme, key, value.clone());
        Ok(value)
    }

    /// Empty one theme's namespace; other themes are untouched
    pub fn clear(&self, theme: &str) {
        let mut themes = self.themes.write();
        let dropped = themes
            .insert(theme.to_string(), Namespace::with_hasher(RandomState::new()))
            .map_or(0, |namespace| namespace.len());
        debug!(theme, dropped, "cleared theme namespace");
    }

    /// Empty every namespace and reset statistics
    pub fn reset(&self) {
        let mut themes = self.themes.write();
        let dropped: usize = themes.values().map(HashMap::len).sum();
        themes.clear();
        self.stats.reset();
        debug!(dropped, "reset memoizer");
    }

    /// Total number of entries across all themes
    pub fn len(&self) -> usize {
        self.themes.read().values().map(HashMap::len).sum()
    }

    /// Check if no theme holds any entry
    pub fn is_empty(&self) -> bool {
        self.themes.read().values().all(HashMap::is_empty)
    }

    /// Number of entries stored for a theme
    pub fn theme_len(&self, theme: &str) -> usize {
        self.themes.read().get(theme).map_or(0, HashMap::len)
    }

    /// Whether a namespace exists for a theme (possibly empty)
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.read().contains_key(theme)
    }

    /// Names of all known themes, sorted
    pub fn themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get memoizer statistics
    pub fn stats(&self) -> &MemoStats {
        &self.stats
    }

    fn ensure_namespace(&self, theme: &str) {
        let mut themes = self.themes.write();
        if !themes.contains_key(theme) {
            themes.insert(theme.to_string(), Namespace::with_hasher(RandomState::new()));
            debug!(theme, "created theme namespace on lookup");
        }
    }
}

impl<V: Clone> Default for ThemeMemoizer<V> {
    fn default() -> Self {
        Self::new()
    }
}
