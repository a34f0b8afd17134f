use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::kv::{criterion::Criterion, pairs::Pairs, store::{Entries, KvStore}};

/// In-memory key-value store shared by every request handler.
///
/// A single reader-writer lock guards the whole map: readers share it,
/// a `set` batch holds it exclusively from first insert to returned snapshot.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `pairs`.
    pub fn with_pairs(pairs: Pairs) -> Self {
        Self { inner: Arc::new(RwLock::new(pairs.into_iter().collect())) }
    }

    fn snapshot(map: &HashMap<String, Value>) -> Entries {
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get_all(&self) -> Entries {
        let map = self.inner.read().await;
        Self::snapshot(&map)
    }

    async fn get(&self, key: &str) -> StoreResult<Value> {
        let map = self.inner.read().await;
        map.get(key).cloned().ok_or_else(|| {
            debug!(%key, "lookup missed");
            StoreError::key_not_found(key)
        })
    }

    async fn set(&self, pairs: Pairs) -> Entries {
        let count = pairs.len();
        let mut map = self.inner.write().await;
        map.extend(pairs);
        let entries = Self::snapshot(&map);
        drop(map);
        debug!(pairs = count, keys = entries.len(), "batch applied");
        entries
    }

    async fn search_many(&self, criteria: &[Criterion]) -> Vec<String> {
        let map = self.inner.read().await;
        criteria
            .iter()
            .flat_map(|c| map.keys().filter(move |k| c.matches(k)).cloned())
            .collect()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
