use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::spawn_app;

fn track(activity: Option<&str>, calories_burned: i64) -> serde_json::Value {
    let mut payload = json!({
        "steps": 2000,
        "caloriesBurned": calories_burned,
        "distanceCovered": 1.5,
        "weight": 70.0
    });
    if let Some(activity) = activity {
        payload["activity"] = json!(activity);
    }
    payload
}

#[tokio::test]
async fn summary_groups_calories_by_activity_with_unknown_fallback() {
    let app = spawn_app().await;
    let client = Client::new();

    for payload in [
        track(Some("Run"), 100),
        track(Some("Run"), 50),
        track(None, 30),
    ] {
        client
            .post(format!("{}/tracks", app.address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");
    }

    let response = client
        .get(format!("{}/tracks/summary", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Invalid response body");
    assert_eq!(body, json!({ "Run": 150, "Unknown": 30 }));
}

#[tokio::test]
async fn summary_of_empty_store_is_an_empty_mapping() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/tracks/summary", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Invalid response body");
    assert_eq!(body, json!({}));
}
