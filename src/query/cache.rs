//! Per-key response cache with in-flight deduplication.
//!
//! Each key owns an async slot. A fetch holds the slot while the request runs,
//! so identical concurrent fetches wait and then reuse the result instead of
//! issuing their own request. Invalidation detaches slots from the map: a
//! fetch already in flight still completes for its callers, but the next
//! fetch for that key goes back to the server.

use super::keys::{Family, InvalidationGraph, QueryKey};
use crate::api::ApiError;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct Cached {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
}

type Slot = Arc<tokio::sync::Mutex<Option<Cached>>>;

pub struct QueryCache {
    stale_time: Duration,
    graph: InvalidationGraph,
    slots: Mutex<HashMap<QueryKey, Slot>>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("stale_time", &self.stale_time)
            .field("graph", &self.graph)
            .field("keys", &self.len())
            .finish()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(stale_time: Duration) -> Self {
        Self::with_graph(stale_time, InvalidationGraph::default())
    }

    #[must_use]
    pub fn with_graph(stale_time: Duration, graph: InvalidationGraph) -> Self {
        Self {
            stale_time,
            graph,
            slots: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &InvalidationGraph {
        &self.graph
    }

    /// Number of keys currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &QueryKey) -> Slot {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.clone())
            .or_default()
            .clone()
    }

    /// Returns the cached value for `key` when fresh, otherwise runs `fetch`
    /// and caches its result. Errors are returned but never cached.
    ///
    /// # Errors
    /// Returns whatever error `fetch` produces.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let requested_at = Instant::now();
        let slot = self.slot(&key);
        let mut guard = slot.lock().await;

        if let Some(cached) = guard.as_ref() {
            // Served if fresh, or if it was fetched while this caller waited.
            let reusable = cached.fetched_at.elapsed() < self.stale_time
                || cached.fetched_at >= requested_at;
            if reusable {
                if let Some(value) = cached.value.downcast_ref::<T>() {
                    debug!(key = %key, "query cache hit");
                    return Ok(value.clone());
                }
            }
        }

        debug!(key = %key, "query cache miss");
        let value = fetch().await?;
        *guard = Some(Cached {
            value: Arc::new(value.clone()),
            fetched_at: Instant::now(),
        });
        Ok(value)
    }

    /// Returns a cached value without fetching, regardless of freshness.
    #[must_use]
    pub fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let slot = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()?;
        let guard = slot.try_lock().ok()?;
        guard
            .as_ref()
            .and_then(|cached| cached.value.downcast_ref::<T>().cloned())
    }

    /// Seeds `key` with a value, typically the response of an update.
    pub fn set<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        let slot = Arc::new(tokio::sync::Mutex::new(Some(Cached {
            value: Arc::new(value),
            fetched_at: Instant::now(),
        })));
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, slot);
    }

    pub fn remove(&self, key: &QueryKey) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    /// Drops every key of `family`.
    pub fn invalidate(&self, family: Family) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|key, _| key.family != family);
    }

    /// Drops every family the graph says a mutation on `family` affects.
    pub fn invalidate_after(&self, family: Family) {
        let affected = self.graph.affected(family);
        debug!(mutated = %family, ?affected, "invalidating queries");
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|key, _| !affected.contains(&key.family));
    }

    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted(counter: &AtomicUsize, value: u32) -> Result<u32, ApiError> {
        counter.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(value)
    }

    #[tokio::test]
    async fn fresh_values_are_reused() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);
        let key = QueryKey::new(Family::DashboardStats);

        let first = cache.fetch(key.clone(), || counted(&calls, 7)).await.unwrap();
        let second = cache.fetch(key.clone(), || counted(&calls, 8)).await.unwrap();
        assert_eq!((first, second), (7, 7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_values_are_refetched() {
        let cache = QueryCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);
        let key = QueryKey::new(Family::Funnel);

        cache.fetch(key.clone(), || counted(&calls, 1)).await.unwrap();
        let value = cache.fetch(key, || counted(&calls, 2)).await.unwrap();
        assert_eq!(value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn identical_in_flight_fetches_are_deduplicated() {
        let cache = QueryCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);
        let key = QueryKey::with_id(Family::Candidate, "c-1");

        let (a, b, c) = tokio::join!(
            cache.fetch(key.clone(), || counted(&calls, 1)),
            cache.fetch(key.clone(), || counted(&calls, 2)),
            cache.fetch(key.clone(), || counted(&calls, 3)),
        );
        assert_eq!((a.unwrap(), b.unwrap(), c.unwrap()), (1, 1, 1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::new(Family::TimeToHire);

        let failed: Result<u32, ApiError> = cache
            .fetch(key.clone(), || async {
                Err(ApiError::Network("down".to_string()))
            })
            .await;
        assert!(failed.is_err());

        let value = cache.fetch(key, || async { Ok(5_u32) }).await.unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn invalidation_follows_the_graph() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let list = QueryKey::new(Family::Candidates);
        let detail = QueryKey::with_id(Family::Candidate, "c-1");
        let stats = QueryKey::new(Family::DashboardStats);
        cache.set(list.clone(), 1_u32);
        cache.set(detail.clone(), 2_u32);
        cache.set(stats.clone(), 3_u32);

        cache.invalidate_after(Family::Candidates);
        assert_eq!(cache.peek::<u32>(&list), None);
        assert_eq!(cache.peek::<u32>(&detail), None);
        assert_eq!(cache.peek::<u32>(&stats), Some(3));

        cache.invalidate(Family::DashboardStats);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn declared_dependencies_are_invalidated() {
        let graph = InvalidationGraph::default().declare(Family::Candidates, Family::DashboardStats);
        let cache = QueryCache::with_graph(Duration::from_secs(60), graph);
        let stats = QueryKey::new(Family::DashboardStats);
        cache.set(stats.clone(), 3_u32);

        cache.invalidate_after(Family::Candidates);
        assert_eq!(cache.peek::<u32>(&stats), None);
    }

    #[tokio::test]
    async fn set_remove_and_clear() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::with_id(Family::Company, "co-1");
        cache.set(key.clone(), "Acme".to_string());
        assert_eq!(cache.peek::<String>(&key), Some("Acme".to_string()));
        // Wrong type is a miss rather than a panic.
        assert_eq!(cache.peek::<u32>(&key), None);

        cache.remove(&key);
        assert_eq!(cache.peek::<String>(&key), None);

        cache.set(key, 1_u8);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
