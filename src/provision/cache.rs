use super::Resolution;
use parking_lot::RwLock;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use tracing::trace;

/// Default staleness bound for resolved datasets.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct Entry {
    resolution: Resolution,
    stored_at: Instant,
}

/// Thread-safe, read-mostly cache of resolutions keyed by source identifier.
///
/// Entries older than the TTL are treated as absent and replaced on the next
/// insert.
pub struct DatasetCache {
    ttl: Duration,
    map: RwLock<HashMap<String, Entry>>,
}

impl DatasetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            map: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, source: &str) -> Option<Resolution> {
        self.get_at(source, Instant::now())
    }

    /// Lookup as seen at `now`.
    pub fn get_at(&self, source: &str, now: Instant) -> Option<Resolution> {
        let map = self.map.read();
        let entry = map.get(source)?;
        let age = now.saturating_duration_since(entry.stored_at);
        if age < self.ttl {
            Some(entry.resolution.clone())
        } else {
            trace!(source, ?age, "cache entry expired");
            None
        }
    }

    pub fn insert(&self, source: &str, resolution: Resolution) {
        self.insert_at(source, resolution, Instant::now());
    }

    pub fn insert_at(&self, source: &str, resolution: Resolution, now: Instant) {
        self.map.write().insert(
            source.to_string(),
            Entry {
                resolution,
                stored_at: now,
            },
        );
    }

    pub fn invalidate(&self, source: &str) -> bool {
        self.map.write().remove(source).is_some()
    }

    /// Drop expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let mut map = self.map.write();
        let before = map.len();
        map.retain(|_, e| now.saturating_duration_since(e.stored_at) < self.ttl);
        before - map.len()
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TabularDataset;
    use crate::provision::Origin;
    use std::sync::Arc;

    fn resolution(tag: &str) -> Resolution {
        Resolution {
            dataset: Arc::new(TabularDataset::literal(&["Tag"], vec![vec![tag.into()]])),
            origin: Origin::Remote,
        }
    }

    #[test]
    fn fresh_entry_is_returned() {
        let cache = DatasetCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.insert_at("src", resolution("a"), t0);
        let hit = cache.get_at("src", t0 + Duration::from_secs(299)).unwrap();
        assert_eq!(hit.dataset.text(0, "Tag").as_deref(), Some("a"));
    }

    #[test]
    fn stale_entry_is_absent() {
        let cache = DatasetCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.insert_at("src", resolution("a"), t0);
        assert!(cache.get_at("src", t0 + Duration::from_secs(300)).is_none());
        assert!(cache.get_at("other", t0).is_none());
    }

    #[test]
    fn insert_replaces_and_invalidate_removes() {
        let cache = DatasetCache::default();
        let t0 = Instant::now();
        cache.insert_at("src", resolution("a"), t0);
        cache.insert_at("src", resolution("b"), t0);
        assert_eq!(cache.len(), 1);
        let hit = cache.get_at("src", t0).unwrap();
        assert_eq!(hit.dataset.text(0, "Tag").as_deref(), Some("b"));
        assert!(cache.invalidate("src"));
        assert!(!cache.invalidate("src"));
        assert!(cache.is_empty());
    }

    #[test]
    fn purge_drops_only_expired() {
        let cache = DatasetCache::new(Duration::from_secs(10));
        let t0 = Instant::now();
        cache.insert_at("old", resolution("a"), t0);
        cache.insert_at("new", resolution("b"), t0 + Duration::from_secs(8));
        assert_eq!(cache.purge_expired_at(t0 + Duration::from_secs(12)), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get_at("new", t0 + Duration::from_secs(12)).is_some());
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(DatasetCache::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.insert(&format!("src-{}", i), resolution("x"));
                    cache.get(&format!("src-{}", i)).is_some()
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
        assert_eq!(cache.len(), 4);
    }
}
