//! Per-key coalescing of concurrent cache misses

use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Serializes work on the same key; different keys proceed in parallel
#[derive(Debug, Default)]
pub struct SingleFlight {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `key`
    ///
    /// Callers queued behind the holder run their own `f` afterwards, so `f` should
    /// first check whether the holder already did the work.
    pub async fn run<F, Fut, T>(&self, key: &str, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let lock = self.locks.entry(key.to_string()).or_default().clone();

        let result = {
            let _guard = lock.lock().await;
            f().await
        };

        drop(lock);
        // Only the map still references the lock once nobody is waiting
        self.locks
            .remove_if(key, |_, lock| Arc::strong_count(lock) == 1);

        result
    }

    /// Number of keys with a lock currently allocated
    pub fn in_flight(&self) -> usize {
        self.locks.len()
    }
}
