//! Per-key fetch locks.
//!
//! One async mutex per request signature serializes cache fills for that
//! signature while requests with other signatures proceed untouched. Locks
//! are created on first use with atomic insert-if-absent semantics and are
//! never removed: the key space is the finite set of upstream endpoints
//! times their parameter combinations, so growth is bounded in practice.
//! If the parameter space ever becomes caller-controlled and unbounded,
//! this map needs a sweep.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct LockRegistry {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the lock for `key`, creating it on first use. Two callers
    /// racing on a fresh key observe the same lock, never two.
    pub fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
