//! HTTP transport integration tests.
//!
//! Starts an axum server on port 0 and exercises it with reqwest.

use std::sync::{Arc, RwLock};

use merchant_proximity::{router, MerchantDraft, MerchantStore, SharedStore};
use serde_json::json;

fn seeded_store() -> SharedStore {
    let mut store = MerchantStore::new();
    for (latitude, longitude, name) in [
        (51.533848, -0.318844, "Tesco Metro (London)"),
        (53.321165, -6.266164, "Tesco Metro (Rathmines)"),
        (53.348072, -6.265225, "Tesco Metro (Quays)"),
    ] {
        store.create(MerchantDraft {
            latitude,
            longitude,
            merchant_name: name.to_string(),
        });
    }
    Arc::new(RwLock::new(store))
}

/// Bind to port 0 and return the actual base URL.
async fn start_server(store: SharedStore) -> String {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn greeting() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client.get(&base).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Merchant proximity service");
}

#[tokio::test]
async fn list_orders_names_by_proximity() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/merchants?lat=53.3252185&long=-6.2550504"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let names: Vec<String> = resp.json().await.unwrap();
    assert_eq!(
        names,
        vec![
            "Tesco Metro (Rathmines)",
            "Tesco Metro (Quays)",
            "Tesco Metro (London)"
        ]
    );
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let base = start_server(Arc::new(RwLock::new(MerchantStore::new()))).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/merchants?lat=0&long=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let names: Vec<String> = resp.json().await.unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn get_by_id_returns_wire_shape() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/merchants/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "latitude": 53.321165,
            "longitude": -6.266164,
            "merchantId": 1,
            "merchantName": "Tesco Metro (Rathmines)"
        })
    );
}

#[tokio::test]
async fn get_missing_id_returns_404() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/merchants/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "no merchant with id 99");
}

#[tokio::test]
async fn create_assigns_next_id() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/merchants"))
        .json(&json!({
            "latitude": 53.34,
            "longitude": -6.26,
            "merchantName": "Tesco Express (Dame St)"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["merchantId"], 3);
    assert_eq!(body["merchantName"], "Tesco Express (Dame St)");

    let resp = client
        .get(format!("{base}/merchants/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn patch_updates_only_sent_fields() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/merchants/1"))
        .json(&json!({ "merchantName": "Tesco Metro (Renamed)" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["merchantName"], "Tesco Metro (Renamed)");
    assert_eq!(body["latitude"], 53.321165);
    assert_eq!(body["longitude"], -6.266164);
    assert_eq!(body["merchantId"], 1);
}

#[tokio::test]
async fn patch_missing_id_returns_404() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/merchants/99"))
        .json(&json!({ "merchantName": "nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_returns_record_then_404s_and_recycles_id() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/merchants/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["merchantName"], "Tesco Metro (Rathmines)");

    let resp = client
        .get(format!("{base}/merchants/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // The freed id is handed to the next creation.
    let resp = client
        .post(format!("{base}/merchants"))
        .json(&json!({
            "latitude": 53.0,
            "longitude": -6.0,
            "merchantName": "Tesco Metro (Reborn)"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["merchantId"], 1);
}
