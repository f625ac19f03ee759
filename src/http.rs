//! HTTP transport — maps the merchant routes onto a shared store.
//!
//! Uses axum for routing. The store is shared as `Arc<RwLock<MerchantStore>>`
//! and every handler takes the lock for the full operation, so the store's
//! scan-then-mutate sequences never interleave across requests.
//!
//! ## Routes
//!
//! - `GET /` — static greeting.
//! - `GET /merchants?lat={f}&long={f}` — merchant names, nearest first.
//! - `GET /merchants/:id` — full record, 404 if absent.
//! - `POST /merchants` — create from a draft body, returns the record with
//!   its assigned id.
//! - `PATCH /merchants/:id` — partial update, returns the updated record.
//! - `DELETE /merchants/:id` — returns the removed record.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::{Arc, RwLock};
//! use merchant_proximity::{serve, MerchantStore};
//!
//! let store = Arc::new(RwLock::new(MerchantStore::new()));
//! serve(store, "0.0.0.0:3000").await?;
//! ```

use std::sync::{Arc, RwLock};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::merchant::{MerchantDraft, MerchantPatch};
use crate::store::MerchantStore;

/// The store as shared by the HTTP host.
pub type SharedStore = Arc<RwLock<MerchantStore>>;

/// Query parameters for the proximity listing.
#[derive(Debug, Deserialize)]
struct ProximityQuery {
    lat: f64,
    long: f64,
}

/// Build an axum `Router` over the given store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/merchants", get(list_handler).post(create_handler))
        .route(
            "/merchants/:id",
            get(find_handler)
                .patch(update_handler)
                .delete(delete_handler),
        )
        .with_state(store)
}

/// Serve the merchant routes at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(store: SharedStore, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "merchant service listening");
    axum::serve(listener, app).await
}

/// Render a store error as `(status, {"error": ...})`.
fn error_response(err: StoreError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// `GET /` — greeting, no store involvement.
async fn index_handler() -> impl IntoResponse {
    "Merchant proximity service"
}

/// `GET /merchants?lat=&long=` — names ordered by ascending distance.
async fn list_handler(
    State(store): State<SharedStore>,
    Query(query): Query<ProximityQuery>,
) -> Response {
    let store = match store.read() {
        Ok(guard) => guard,
        Err(_) => return error_response(StoreError::LockPoisoned("rank")),
    };
    let names: Vec<String> = store
        .rank_by_proximity(query.lat, query.long)
        .into_iter()
        .map(|(_, m)| m.merchant_name)
        .collect();
    debug!(lat = query.lat, long = query.long, count = names.len(), "ranked merchants");
    Json(names).into_response()
}

/// `GET /merchants/:id` — full record or 404.
async fn find_handler(State(store): State<SharedStore>, Path(id): Path<u64>) -> Response {
    let store = match store.read() {
        Ok(guard) => guard,
        Err(_) => return error_response(StoreError::LockPoisoned("find")),
    };
    match store.find(id) {
        Ok(merchant) => Json(merchant).into_response(),
        Err(err) => error_response(err),
    }
}

/// `POST /merchants` — create and return the record with its assigned id.
async fn create_handler(
    State(store): State<SharedStore>,
    Json(draft): Json<MerchantDraft>,
) -> Response {
    let mut store = match store.write() {
        Ok(guard) => guard,
        Err(_) => return error_response(StoreError::LockPoisoned("create")),
    };
    let merchant = store.create(draft);
    info!(id = merchant.merchant_id, name = %merchant.merchant_name, "merchant created");
    Json(merchant).into_response()
}

/// `PATCH /merchants/:id` — partial update.
async fn update_handler(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(patch): Json<MerchantPatch>,
) -> Response {
    let mut store = match store.write() {
        Ok(guard) => guard,
        Err(_) => return error_response(StoreError::LockPoisoned("update")),
    };
    match store.update(id, patch) {
        Ok(merchant) => {
            info!(id, "merchant updated");
            Json(merchant).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// `DELETE /merchants/:id` — remove and return the record.
async fn delete_handler(State(store): State<SharedStore>, Path(id): Path<u64>) -> Response {
    let mut store = match store.write() {
        Ok(guard) => guard,
        Err(_) => return error_response(StoreError::LockPoisoned("delete")),
    };
    match store.delete(id) {
        Ok(merchant) => {
            info!(id, "merchant deleted");
            Json(merchant).into_response()
        }
        Err(err) => error_response(err),
    }
}
