//! Bounded TTL cache for upstream responses.
//!
//! Entries expire lazily: `get` treats anything older than the TTL as
//! absent, and no background task sweeps. When an insert would exceed
//! capacity, the oldest-inserted entry is evicted first, so inserts never
//! fail and an eviction only ever manifests as a future cache miss.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct Entry {
    inserted_at: Instant,
    value: Arc<Value>,
}

/// Thread-safe response cache keyed by canonical request signature.
///
/// A single mutex guards the map: the workload is read-heavy with short
/// critical sections, and the expensive part (the network fetch) happens
/// entirely outside the cache.
pub struct RequestCache {
    entries: Mutex<HashMap<String, Entry>>,
    max_size: usize,
    ttl: Duration,
}

impl RequestCache {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_size,
            ttl,
        }
    }

    /// Look up a fresh entry. An expired entry counts as absent and is
    /// dropped on the spot.
    pub fn get(&self, key: &str) -> Option<Arc<Value>> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Insert or overwrite, stamping the current time. Evicts the
    /// oldest-inserted entry when a new key would exceed capacity.
    pub fn insert(&self, key: String, value: Arc<Value>) {
        if self.max_size == 0 {
            return;
        }
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if !entries.contains_key(&key) && entries.len() >= self.max_size {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key,
            Entry {
                inserted_at: Instant::now(),
                value,
            },
        );
    }
}
