use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::path::split_segments;

pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

// Bounded cache of tokenized paths. Query sets are typically small and
// fixed, so the bound only matters when a caller feeds many distinct
// one-shot paths.
pub struct SegmentCache {
    inner: Mutex<LruCache<String, Arc<[String]>>>,
}

impl SegmentCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn segments(&self, path: &str) -> Arc<[String]> {
        let mut inner = self.inner.lock();
        if let Some(hit) = inner.get(path) {
            return hit.clone();
        }
        let segs: Arc<[String]> = split_segments(path).into();
        inner.put(path.to_string(), segs.clone());
        segs
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SegmentCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
