//! Owned asset catalog caches.
//!
//! Style and token catalogs come from a remote listing endpoint and change
//! rarely; callers hold a [`StyleCatalogs`] in their application context and
//! pass it down instead of sharing module-level globals. Entries live for a
//! TTL and can be invalidated explicitly after an upload.

use std::time::{Duration, Instant};

/// One discoverable asset (floor style, wall style, or token image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub id: String,
    pub label: String,
    pub src: String,
}

/// A populate-on-demand cache with a TTL and explicit invalidation.
#[derive(Debug)]
pub struct AssetCache<T> {
    ttl: Duration,
    slot: Option<(Instant, Vec<T>)>,
}

impl<T> AssetCache<T> {
    /// Creates an empty cache whose entries stay fresh for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Whether the cache holds an unexpired entry.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|(loaded_at, _)| loaded_at.elapsed() <= self.ttl)
    }

    /// Returns the cached items, calling `loader` first if the cache is
    /// empty or expired. A loader failure leaves any stale entry in place so
    /// the caller keeps its last-known-good list.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error when a (re)load was needed and failed.
    pub fn get_or_load<E>(
        &mut self,
        loader: impl FnOnce() -> Result<Vec<T>, E>,
    ) -> Result<&[T], E> {
        if !self.is_fresh() {
            let items = loader()?;
            self.slot = Some((Instant::now(), items));
        }
        Ok(self.slot.as_ref().map_or(&[], |(_, items)| items.as_slice()))
    }

    /// Drops the cached entry; the next access reloads.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

/// The three asset catalogs the editor browses.
#[derive(Debug)]
pub struct StyleCatalogs {
    pub floor_styles: AssetCache<StyleEntry>,
    pub wall_styles: AssetCache<StyleEntry>,
    pub drive_tokens: AssetCache<StyleEntry>,
}

impl StyleCatalogs {
    /// Creates empty catalogs sharing one TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            floor_styles: AssetCache::new(ttl),
            wall_styles: AssetCache::new(ttl),
            drive_tokens: AssetCache::new(ttl),
        }
    }

    /// Invalidates all three catalogs at once.
    pub fn invalidate_all(&mut self) {
        self.floor_styles.invalidate();
        self.wall_styles.invalidate();
        self.drive_tokens.invalidate();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entries(tag: &str) -> Vec<StyleEntry> {
        vec![StyleEntry {
            id: tag.into(),
            label: tag.into(),
            src: format!("styles/{tag}.png"),
        }]
    }

    #[test]
    fn loader_runs_once_while_fresh() {
        let mut cache = AssetCache::new(Duration::from_secs(60));
        let mut calls = 0;
        for _ in 0..3 {
            let items = cache
                .get_or_load(|| -> Result<_, ()> {
                    calls += 1;
                    Ok(entries("stone"))
                })
                .unwrap();
            assert_eq!(items.len(), 1);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let mut cache = AssetCache::new(Duration::from_secs(60));
        cache
            .get_or_load(|| -> Result<_, ()> { Ok(entries("stone")) })
            .unwrap();
        cache.invalidate();
        assert!(!cache.is_fresh());
        let items = cache
            .get_or_load(|| -> Result<_, ()> { Ok(entries("brick")) })
            .unwrap();
        assert_eq!(items[0].id, "brick");
    }

    #[test]
    fn failed_reload_keeps_the_cache_empty_but_propagates() {
        let mut cache: AssetCache<StyleEntry> = AssetCache::new(Duration::ZERO);
        let result = cache.get_or_load(|| Err("listing endpoint unreachable"));
        assert_eq!(result.unwrap_err(), "listing endpoint unreachable");
    }

    #[test]
    fn zero_ttl_always_reloads() {
        let mut cache = AssetCache::new(Duration::ZERO);
        let mut calls = 0;
        for _ in 0..2 {
            cache
                .get_or_load(|| -> Result<_, ()> {
                    calls += 1;
                    Ok(entries("stone"))
                })
                .unwrap();
        }
        assert_eq!(calls, 2);
    }
}
