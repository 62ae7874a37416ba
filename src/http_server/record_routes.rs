//! Record HTTP Routes
//!
//! CRUD endpoints over the record collection.
//!
//! Each request loads the collection from the store, works on it in
//! memory, and saves it again before responding. Every handler holds
//! `collection_lock` for its whole load-mutate-save sequence (a load may seed,
//! so listing writes too) and concurrent requests in this process cannot
//! overwrite each other. Other processes writing the same file are not
//! coordinated with. Store I/O is synchronous and runs on tokio's blocking
//! pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::errors::{ApiError, ApiResult};
use crate::record::{Record, Validator};
use crate::store::{Collection, RecordStore};

// ==================
// Shared State
// ==================

/// Record state shared across handlers
#[derive(Debug)]
pub struct RecordsState {
    pub collection: Collection,
    pub validator: Validator,
    collection_lock: Mutex<()>,
}

impl RecordsState {
    pub fn new(store: Arc<dyn RecordStore>, validator: Validator) -> Self {
        Self {
            collection: Collection::new(store),
            validator,
            collection_lock: Mutex::new(()),
        }
    }

    /// Run `work` against the collection while holding `collection_lock`.
    ///
    /// The closure runs on the blocking pool so file I/O never stalls an
    /// async worker.
    async fn with_collection<T, F>(&self, work: F) -> ApiResult<T>
    where
        F: FnOnce(&Collection) -> ApiResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.collection_lock.lock().await;
        let collection = self.collection.clone();
        tokio::task::spawn_blocking(move || work(&collection))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn success() -> Self {
        Self { ok: true }
    }
}

/// Parse a request body leniently: anything that is not JSON becomes `{}`
fn payload(body: &Bytes) -> Value {
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "unparseable request body, treating as empty object");
            Value::Object(Default::default())
        }
    }
}

// ==================
// Record Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<RecordsState>) -> Router {
    Router::new()
        .route(
            "/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route(
            "/records/:id",
            put(update_record_handler).delete(delete_record_handler),
        )
        .with_state(state)
}

/// Liveness route served at `/`
pub fn root_routes() -> Router {
    Router::new().route("/", get(root_handler))
}

async fn root_handler() -> &'static str {
    "Collection API is running."
}

// ==================
// Handlers
// ==================

async fn list_records_handler(
    State(state): State<Arc<RecordsState>>,
) -> ApiResult<Json<Vec<Record>>> {
    let records = state
        .with_collection(|collection| Ok(collection.load()?))
        .await?;
    Ok(Json(records))
}

async fn create_record_handler(
    State(state): State<Arc<RecordsState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let draft = state.validator.validate(&payload(&body))?;

    let record = state
        .with_collection(move |collection| {
            let mut records = collection.load()?;
            let record = Record::new(draft);
            records.insert(0, record.clone());
            collection.save(&records)?;
            Ok(record)
        })
        .await?;

    info!(id = %record.id, title = %record.title, "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record_handler(
    State(state): State<Arc<RecordsState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<OkResponse>> {
    let draft = state.validator.validate(&payload(&body))?;

    let target = id.clone();
    state
        .with_collection(move |collection| {
            let mut records = collection.load()?;
            let record = records
                .iter_mut()
                .find(|r| r.id == target)
                .ok_or(ApiError::RecordNotFound)?;
            record.apply(draft);
            collection.save(&records)?;
            Ok(())
        })
        .await?;

    info!(id = %id, "record updated");
    Ok(Json(OkResponse::success()))
}

async fn delete_record_handler(
    State(state): State<Arc<RecordsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let target = id.clone();
    let remaining = state
        .with_collection(move |collection| {
            let mut records = collection.load()?;
            let before = records.len();
            records.retain(|r| r.id != target);
            if records.len() == before {
                return Err(ApiError::RecordNotFound);
            }
            collection.save(&records)?;
            Ok(records.len())
        })
        .await?;

    info!(id = %id, remaining, "record deleted");
    Ok(Json(OkResponse::success()))
}
