//! API integration tests
//!
//! These run against a live server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_checkin_pair_builds_shift() {
    let client = Client::new();

    let first = client
        .post(format!("{}/shifts/checkins", BASE_URL))
        .json(&json!({
            "checkin_date": "2024-06-03",
            "checkin_ts": "2024-06-03T08:00:00Z",
            "checkin_type": "in",
            "user_id": 42
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/shifts/checkins", BASE_URL))
        .json(&json!({
            "checkin_date": "2024-06-03",
            "checkin_ts": "2024-06-03T12:00:00Z",
            "checkin_type": "out",
            "user_id": 42
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 201);

    let shift: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(shift["date"], "2024-06-03");
    assert_eq!(shift["worked_seconds"], 14400);
    assert_eq!(shift["checkins"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore]
async fn test_month_listing_scoped_to_user() {
    let client = Client::new();

    let response = client
        .get(format!("{}/shifts/month/2024-06?user_id=42", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let shifts: Value = response.json().await.expect("Failed to parse response");
    for shift in shifts.as_array().unwrap() {
        for checkin in shift["checkins"].as_array().unwrap() {
            assert_eq!(checkin["user_id"], 42);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_malformed_timestamp_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/shifts/checkins", BASE_URL))
        .json(&json!({
            "checkin_date": "2024-06-03",
            "checkin_ts": "yesterday-ish",
            "checkin_type": "in",
            "user_id": 42
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_checkin_is_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/shifts/checkins/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_absence_roundtrip() {
    let client = Client::new();

    let created = client
        .post(format!("{}/absences", BASE_URL))
        .json(&json!({
            "absence_date": "2024-06-10",
            "absence_type": "vacation",
            "hours": 8.0,
            "comment": "summer leave",
            "user_id": 42
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(created.status(), 201);

    let absence: Value = created.json().await.expect("Failed to parse response");
    let id = absence["id"].as_i64().expect("No id in response");

    let listed = client
        .get(format!("{}/absences?user_id=42", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(listed.status().is_success());

    let body: Value = listed.json().await.expect("Failed to parse response");
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"].as_i64() == Some(id)));

    let deleted = client
        .delete(format!("{}/absences/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(deleted.status(), 204);
}
