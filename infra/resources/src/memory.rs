use crate::error::ResourceError;
use crate::store::ResourceStore;
use async_trait::async_trait;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct MemoryInner {
    entries: RwLock<FxHashMap<String, Arc<[u8]>>>,
    reads: RwLock<FxHashMap<String, usize>>,
    total_reads: AtomicUsize,
}

/// In-memory [`ResourceStore`], cloneable and safe to share between tasks.
///
/// Every lookup (hit or miss) is counted, which lets callers assert how many
/// I/O attempts a cache or fallback chain actually performed.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    inner: Arc<MemoryInner>,
}

impl MemoryResourceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` under `key`, replacing any previous value.
    pub fn insert(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let bytes: Vec<u8> = bytes.into();
        self.inner.entries.write().insert(key.into(), bytes.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }

    pub fn remove(&self, key: &str) -> bool {
        self.inner.entries.write().remove(key).is_some()
    }

    /// Number of `read` calls made so far, across all keys.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.inner.total_reads.load(Ordering::Relaxed)
    }

    /// Number of `read` calls made for `key`.
    #[must_use]
    pub fn reads_of(&self, key: &str) -> usize {
        self.inner.reads.read().get(key).copied().unwrap_or(0)
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        self.inner.total_reads.fetch_add(1, Ordering::Relaxed);
        *self.inner.reads.write().entry(key.to_owned()).or_default() += 1;

        self.inner
            .entries
            .read()
            .get(key)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| ResourceError::NotFound { key: key.to_owned().into(), context: None })
    }
}
