
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::index::search::SearchResult;

struct CacheEntry {
    results: Vec<SearchResult>,
    inserted_at: Instant,
}

/// Short-TTL memoization of search results keyed by `(query, limit)`.
///
/// An entry is valid only while `now - inserted_at < ttl`. Expired entries
/// are logically dead on read but stay in the map until an eviction sweep;
/// sweeps trim the map down to the `capacity` most-recently-inserted keys.
/// Not a strict LRU: reads do not refresh recency.
pub struct ResultCache {
    ttl: Duration,
    capacity: usize,
    entries: HashMap<String, CacheEntry>,
    insertion_order: VecDeque<String>,
}

impl ResultCache {
    #[inline]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    /// Normalized cache key for a query/limit pair.
    #[inline]
    pub fn key(query: &str, limit: usize) -> String {
        format!("{}:{}", query.trim().to_lowercase(), limit)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<Vec<SearchResult>> {
        self.get_at(key, Instant::now())
    }

    /// Lookup against an explicit clock, so tests can move time forward.
    #[inline]
    pub fn get_at(&self, key: &str, now: Instant) -> Option<Vec<SearchResult>> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.inserted_at) < self.ttl {
            Some(entry.results.clone())
        } else {
            None
        }
    }

    #[inline]
    pub fn insert(&mut self, key: String, results: Vec<SearchResult>) {
        self.insert_at(key, results, Instant::now());
    }

    #[inline]
    pub fn insert_at(&mut self, key: String, results: Vec<SearchResult>, now: Instant) {
        if self.entries.contains_key(&key) {
            self.insertion_order.retain(|k| *k != key);
        }
        self.insertion_order.push_back(key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                results,
                inserted_at: now,
            },
        );
        self.evict();
    }

    /// Drop everything; called on every index rebuild so stale-scored
    /// results never outlive the generation that produced them.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict(&mut self) {
        if self.entries.len() <= self.capacity {
            return;
        }
        let mut dropped = 0;
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            dropped += 1;
        }
        debug!("Evicted {} oldest cache entries", dropped);
    }
}
