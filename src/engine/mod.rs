// Retrieval engine: the single entry point consumed by the chat endpoint
// and the admin mutation flows.

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::Result;
use crate::cache::ResultCache;
use crate::config::EngineConfig;
use crate::freshness::{DataSnapshot, snapshot_of};
use crate::index::search::{SearchResult, search};
use crate::index::tfidf::TfIdfIndex;
use crate::knowledge::KnowledgeBase;
use crate::knowledge::store::build_documents;
use crate::prompt;
use crate::router::{Router, compose_context, no_match_message};

/// Default result count for ranked search.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;
/// Default document count for context assembly.
pub const DEFAULT_CONTEXT_LIMIT: usize = 3;

/// The retrieval service owning index, cache, and freshness state.
///
/// Constructed once by the host process and passed by handle to the chat
/// endpoint and admin mutation handlers. The knowledge base stays behind a
/// shared lock so admin flows mutate the same data the freshness poller
/// observes. Rebuilds construct a complete new index aside and publish it
/// in one assignment, so concurrent readers never see a half-built
/// generation.
pub struct RetrievalEngine {
    knowledge: Arc<RwLock<KnowledgeBase>>,
    config: EngineConfig,
    index: RwLock<TfIdfIndex>,
    cache: Mutex<ResultCache>,
    snapshot: RwLock<Option<DataSnapshot>>,
    router: Router,
}

impl RetrievalEngine {
    /// Build the engine and its first index generation.
    ///
    /// The freshness snapshot starts empty; the first poll tick (or the
    /// first manual refresh) stores the baseline.
    #[inline]
    pub fn new(knowledge: Arc<RwLock<KnowledgeBase>>, config: EngineConfig) -> Self {
        let index = {
            let kb = read_lock(&knowledge);
            TfIdfIndex::build(build_documents(&kb))
        };
        let cache = ResultCache::new(config.cache_ttl(), config.cache_capacity);

        Self {
            knowledge,
            config,
            index: RwLock::new(index),
            cache: Mutex::new(cache),
            snapshot: RwLock::new(None),
            router: Router::new(),
        }
    }

    /// Cached, ranked search over the current index generation.
    #[inline]
    pub fn search_documents(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let key = ResultCache::key(query, limit);
        if let Some(hit) = lock_mutex(&self.cache).get(&key) {
            debug!("Cache hit for '{}'", key);
            return hit;
        }

        let results = {
            let index = read_lock(&self.index);
            search(&index, query, limit)
        };
        lock_mutex(&self.cache).insert(key, results.clone());
        results
    }

    /// The primary entry point: route known intents to exact answers,
    /// fall back to ranked retrieval otherwise. Never fails and never
    /// returns an empty string.
    #[inline]
    pub fn relevant_context(&self, query: &str, limit: usize) -> String {
        let routed = {
            let kb = read_lock(&self.knowledge);
            self.router.route(&kb, query)
        };
        if let Some(response) = routed {
            return response;
        }

        let results = self.search_documents(query, limit);
        compose_context(&results).unwrap_or_else(|| no_match_message(query))
    }

    /// Assemble the generation prompt for a query/context pair.
    #[inline]
    pub fn rag_prompt(&self, query: &str, context: &str) -> String {
        let owner_name = read_lock(&self.knowledge).profile.name.clone();
        prompt::rag_prompt(&owner_name, query, context)
    }

    /// Unconditional rebuild, available in every environment mode.
    ///
    /// Admin mutation handlers call this after create/update/delete so the
    /// index does not wait for the next poll tick.
    #[inline]
    pub fn refresh(&self) -> Result<()> {
        info!("Manual index refresh requested");
        self.rebuild_index();
        let snapshot = {
            let kb = read_lock(&self.knowledge);
            snapshot_of(&kb)?
        };
        *write_lock(&self.snapshot) = Some(snapshot);
        Ok(())
    }

    /// One freshness poll: fingerprint the sources, rebuild if anything
    /// changed since the stored snapshot. The first tick only stores a
    /// baseline. Returns whether a rebuild ran.
    #[inline]
    pub fn tick(&self) -> Result<bool> {
        let current = {
            let kb = read_lock(&self.knowledge);
            snapshot_of(&kb)?
        };

        let changed = read_lock(&self.snapshot)
            .as_ref()
            .is_some_and(|previous| previous.sources_differ(&current));

        if changed {
            info!("Knowledge changes detected, rebuilding index");
            self.rebuild_index();
        }
        *write_lock(&self.snapshot) = Some(current);
        Ok(changed)
    }

    /// Spawn the periodic freshness poller.
    ///
    /// Returns `None` outside development mode: the gate is explicit, and
    /// `refresh()` stays the only rebuild trigger in production.
    #[inline]
    pub fn spawn_monitor(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.dev_mode {
            debug!("Freshness poller disabled outside development mode");
            return None;
        }

        let engine = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(engine.config.poll_interval());
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if let Err(err) = engine.tick() {
                    warn!("Freshness poll failed: {}", err);
                }
            }
        }))
    }

    /// The last stored freshness snapshot; `None` until the first tick or
    /// refresh.
    #[inline]
    pub fn freshness_info(&self) -> Option<DataSnapshot> {
        read_lock(&self.snapshot).clone()
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a fresh generation aside, then publish it and drop every
    /// cached result so stale scores never outlive their generation.
    fn rebuild_index(&self) {
        let new_index = {
            let kb = read_lock(&self.knowledge);
            TfIdfIndex::build(build_documents(&kb))
        };
        *write_lock(&self.index) = new_index;
        lock_mutex(&self.cache).clear();
    }
}

// Lock poisoning is recovered rather than propagated: no writer leaves
// state partially mutated, since rebuilds swap fully-built structures.

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn lock_mutex<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
