use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreResult;
use crate::kv::{criterion::Criterion, pairs::Pairs};

/// Point-in-time copy of the store, ordered by key so it serializes stably.
pub type Entries = BTreeMap<String, Value>;

/// Trait abstraction for the key-value store.
/// Implementations must make every `set` batch visible to readers all at once.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Snapshot of every pair currently stored.
    async fn get_all(&self) -> Entries;

    /// Value stored under exactly `key`.
    async fn get(&self, key: &str) -> StoreResult<Value>;

    /// Insert or overwrite every pair in one batch; returns the store after the merge.
    /// Payload validation happens in [`Pairs`], so a batch cannot fail here.
    async fn set(&self, pairs: Pairs) -> Entries;

    /// Keys matching `criterion`, in no particular order. `None` matches nothing.
    async fn search(&self, criterion: Option<Criterion>) -> Vec<String> {
        match criterion {
            Some(c) => self.search_many(std::slice::from_ref(&c)).await,
            None => Vec::new(),
        }
    }

    /// Matches for each criterion in turn, concatenated, all from one consistent view.
    /// A key matching several criteria appears once per match.
    async fn search_many(&self, criteria: &[Criterion]) -> Vec<String>;

    /// Number of keys currently stored.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
