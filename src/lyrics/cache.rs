use super::models::Lyrics;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Shared in-memory cache of successful lyrics lookups, keyed by track id.
///
/// A capacity of zero disables caching.
#[derive(Debug, Clone)]
pub struct LyricsCache {
    inner: Option<Arc<Mutex<LruCache<String, Lyrics>>>>,
}

impl LyricsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: NonZeroUsize::new(capacity).map(|cap| Arc::new(Mutex::new(LruCache::new(cap)))),
        }
    }

    pub fn get(&self, track_id: &str) -> Option<Lyrics> {
        let inner = self.inner.as_ref()?;
        let mut cache = inner.lock().ok()?;
        cache.get(track_id).cloned()
    }

    pub fn put(&self, track_id: &str, lyrics: Lyrics) {
        if let Some(inner) = &self.inner
            && let Ok(mut cache) = inner.lock()
        {
            cache.put(track_id.to_string(), lyrics);
        }
    }
}
