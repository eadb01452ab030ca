use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    cached_at: DateTime<Utc>,
}

/// Key → value map whose entries expire `ttl` after insertion.
///
/// Clones share the same storage, so one cache can be handed to every
/// request handler.
#[derive(Clone)]
pub struct TtlCache<K, V> {
    entries: Arc<RwLock<HashMap<K, Entry<V>>>>,
    ttl: Duration,
    clock: Clock,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(Utc::now))
    }

    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Clock) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            clock,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_fresh(&self, cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - cached_at < self.ttl
    }

    /// The cached value and its age, if the entry has not expired.
    pub async fn get(&self, key: &K) -> Option<(V, Duration)> {
        let now = (self.clock)();
        let map = self.entries.read().await;
        map.get(key)
            .filter(|entry| self.is_fresh(entry.cached_at, now))
            .map(|entry| (entry.value.clone(), now - entry.cached_at))
    }

    pub async fn insert(&self, key: K, value: V) {
        let cached_at = (self.clock)();
        let mut map = self.entries.write().await;
        map.insert(key, Entry { value, cached_at });
    }

    pub async fn invalidate(&self, key: &K) -> Option<V> {
        let mut map = self.entries.write().await;
        map.remove(key).map(|entry| entry.value)
    }

    /// Drops expired entries and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = (self.clock)();
        let mut map = self.entries.write().await;
        let before = map.len();
        map.retain(|_, entry| now - entry.cached_at < self.ttl);
        before - map.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// `3m, 12s` style age for log lines.
#[must_use]
pub fn format_age(age: Duration) -> String {
    let secs = age.num_seconds();
    format!("{}m, {}s", secs / 60, secs % 60)
}
