//! API Handlers
//!
//! HTTP request handlers that map each endpoint onto one store operation.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{
    CapacityRequest, CapacityResponse, DeleteResponse, ExistsResponse, FlushResponse, GetResponse,
    HealthResponse, KeysResponse, SetRequest, SetResponse,
};

/// Application state shared across all handlers.
///
/// The store synchronizes internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store holding arbitrary JSON values
    pub cache: Arc<CacheStore<Value>>,
    /// TTL applied when a request does not carry one
    pub default_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState around an existing store.
    pub fn new(cache: Arc<CacheStore<Value>>, default_ttl: Duration) -> Self {
        Self { cache, default_ttl }
    }

    /// Creates a new AppState from a store and configuration.
    pub fn from_config(cache: Arc<CacheStore<Value>>, config: &crate::config::Config) -> Self {
        Self::new(cache, Duration::from_secs(config.default_ttl))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req
        .ttl
        .map(Duration::from_secs)
        .unwrap_or(state.default_ttl);
    state.cache.set(req.key.clone(), req.value, ttl);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Missing and expired keys both answer 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.cache.delete(&key) {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for GET /exists/:key
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ExistsResponse> {
    let exists = state.cache.exists(&key);
    Json(ExistsResponse { key, exists })
}

/// Handler for POST /flush
pub async fn flush_handler(State(state): State<AppState>) -> Json<FlushResponse> {
    Json(FlushResponse {
        flushed: state.cache.flush(),
    })
}

/// Handler for GET /keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse {
        count: state.cache.key_count(),
    })
}

/// Handler for PUT /capacity
///
/// A rejected spec answers 400 and leaves the previous ceiling in place.
pub async fn capacity_handler(
    State(state): State<AppState>,
    Json(req): Json<CapacityRequest>,
) -> Result<Json<CapacityResponse>> {
    let max_capacity = state.cache.try_set_max_capacity(&req.size)?;
    Ok(Json(CapacityResponse { max_capacity }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(Arc::new(CacheStore::new()), Duration::from_secs(300))
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let req = SetRequest {
            key: "test_key".to_string(),
            value: json!({"answer": 42}),
            ttl: None,
        };
        let result = set_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        let result = get_handler(State(state.clone()), Path("test_key".to_string())).await;
        let response = result.unwrap();
        assert_eq!(response.value, json!({"answer": 42}));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        state
            .cache
            .set("to_delete", json!("value"), Duration::from_secs(60));

        let result = delete_handler(State(state.clone()), Path("to_delete".to_string())).await;
        assert!(result.is_ok());

        let result = delete_handler(State(state), Path("to_delete".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exists_flush_and_keys_handlers() {
        let state = test_state();
        state.cache.set("a", json!(1), Duration::from_secs(60));
        state.cache.set("b", json!(2.5), Duration::from_secs(60));

        let exists = exists_handler(State(state.clone()), Path("a".to_string())).await;
        assert!(exists.exists);

        let keys = keys_handler(State(state.clone())).await;
        assert_eq!(keys.count, 2);

        let flushed = flush_handler(State(state.clone())).await;
        assert!(flushed.flushed);

        let keys = keys_handler(State(state)).await;
        assert_eq!(keys.count, 0);
    }

    #[tokio::test]
    async fn test_capacity_handler() {
        let state = test_state();

        let req = CapacityRequest {
            size: "100KB".to_string(),
        };
        let response = capacity_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.max_capacity, 100 * 1024);

        let req = CapacityRequest {
            size: "abcKB".to_string(),
        };
        let result = capacity_handler(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidCapacity(_))));
        assert_eq!(state.cache.max_capacity(), Some(100 * 1024));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let state = test_state();

        let req = SetRequest {
            key: "".to_string(),
            value: json!("value"),
            ttl: None,
        };
        let result = set_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
