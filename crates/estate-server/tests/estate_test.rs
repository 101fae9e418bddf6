//! Estate API integration tests against a running server.
//!
//! Run with: cargo test --test estate_test -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("ESTATE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an estate, plant the sample trees and query stats and plans.
#[tokio::test]
#[ignore]
async fn test_estate_flow() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/estate", base))
        .json(&json!({ "length": 6, "width": 3 }))
        .send()
        .await
        .expect("Failed to create estate");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    for (x, y, height) in [(3, 1, 10), (6, 2, 5), (4, 2, 7), (3, 2, 15), (5, 3, 30)] {
        let resp = client
            .post(format!("{}/estate/{}/tree", base, id))
            .json(&json!({ "x": x, "y": y, "height": height }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED, "Should plant ({}, {})", x, y);
    }

    // Same coordinate again
    let resp = client
        .post(format!("{}/estate/{}/tree", base, id))
        .json(&json!({ "x": 3, "y": 1, "height": 12 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let stats: Value = client
        .get(format!("{}/estate/{}/stats", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats, json!({ "count": 5, "max": 30, "min": 5, "median": 10 }));

    let plan: Value = client
        .get(format!("{}/estate/{}/drone-plan", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plan["distance"], json!(242));

    let plan: Value = client
        .get(format!("{}/estate/{}/drone-plan?max_distance=100", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plan, json!({ "distance": 100, "rest": { "x": 4, "y": 2 } }));
}

#[tokio::test]
#[ignore]
async fn test_unknown_estate_is_not_found() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/estate/does-not-exist/stats", base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
