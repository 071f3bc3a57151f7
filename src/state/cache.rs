//! Keyed response cache for the odds and broadcast lookups: bounded LRU
//! with per-entry TTL, so entry lifetime is an explicit choice instead of
//! the process lifetime.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Canonical cache key. Parameter pairs are sorted by name before
/// serialization, so two call sites building the same query in different
/// orders land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(params: &[(&str, &str)]) -> Self {
        let sorted: BTreeMap<&str, &str> = params.iter().copied().collect();
        Self(serde_json::to_string(&sorted).unwrap_or_default())
    }
}

#[derive(Debug)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct RequestCache<T> {
    capacity: usize,
    entries: HashMap<CacheKey, CacheEntry<T>>,
    /// Recency order, front = least recently used.
    order: VecDeque<CacheKey>,
}

impl<T> RequestCache<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<&T> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.expires_at <= Instant::now(),
            None => return None,
        };
        if expired {
            // Drop the entry so it cannot be resurrected.
            self.remove(key);
            return None;
        }
        self.touch(key);
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn insert(&mut self, key: CacheKey, value: T, ttl: Duration) {
        if self.entries.contains_key(&key) {
            self.touch(&key);
        } else {
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, CacheEntry { value, expires_at: Instant::now() + ttl });

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
            self.order.push_back(key.clone());
        }
    }

    fn remove(&mut self, key: &CacheKey) {
        self.entries.remove(key);
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }
}
