use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use service::{Criterion, Entries, Pairs};
use tracing::{debug, warn};

use crate::errors::ApiError;
use crate::observability;
use crate::state::AppState;

/// `?prefix=` / `?suffix=` parameters of `GET /search`.
/// A repeated parameter keeps its first value; unknown parameters are ignored.
#[derive(Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl SearchQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "prefix" => &mut query.prefix,
                "suffix" => &mut query.suffix,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Criteria in evaluation order: prefix first, then suffix.
    pub fn criteria(self) -> Vec<Criterion> {
        self.prefix
            .map(Criterion::Prefix)
            .into_iter()
            .chain(self.suffix.map(Criterion::Suffix))
            .collect()
    }
}

/// Whole store as a JSON object
pub async fn get_all(State(state): State<AppState>) -> Json<Entries> {
    let _timer = observability::track("get_all");
    Json(state.store.get_all().await)
}

/// Value under a single key
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let _timer = observability::track("get");
    state.store.get(&key).await.map(Json).map_err(|e| {
        observability::record_error(e.kind());
        ApiError::from(e)
    })
}

/// Merge a JSON object into the store and return the full store.
/// The body is parsed before the store is touched, so a bad payload changes nothing.
pub async fn set(State(state): State<AppState>, body: Bytes) -> Result<Json<Entries>, ApiError> {
    let _timer = observability::track("set");
    let pairs = Pairs::from_slice(&body).map_err(|e| {
        warn!(error = %e, bytes = body.len(), "rejected set payload");
        observability::record_error(e.kind());
        ApiError::from(e)
    })?;
    let entries = state.store.set(pairs).await;
    observability::set_key_count(entries.len());
    Ok(Json(entries))
}

/// Keys matching `prefix` and/or `suffix`; neither yields `[]`.
/// Both are evaluated against the same view of the store.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<String>> {
    let _timer = observability::track("search");
    let criteria = SearchQuery::from_pairs(params).criteria();
    if criteria.is_empty() {
        debug!("search without prefix or suffix");
    }
    for c in &criteria {
        debug!(criterion = c.label(), needle = c.needle(), "search");
    }
    Json(state.store.search_many(&criteria).await)
}
