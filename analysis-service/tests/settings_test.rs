mod common;

use axum::http::StatusCode;
use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn settings_start_from_defaults() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/settings", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["emailSubject"],
        "Contract Risk Analysis Complete - [document_name]"
    );
    assert_eq!(body["highRiskThreshold"], 75);
    assert_eq!(body["autoSendEmail"], true);

    app.cleanup().await;
}

#[tokio::test]
async fn updated_settings_are_persisted_to_disk() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let current: serde_json::Value = client
        .get(format!("{}/api/settings", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let mut updated = current.clone();
    updated["highRiskThreshold"] = serde_json::json!(80);
    updated["weeklySummary"] = serde_json::json!(true);

    let response = client
        .put(format!("{}/api/settings", app.address))
        .json(&updated)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    // Subsequent reads reflect the update
    let body: serde_json::Value = client
        .get(format!("{}/api/settings", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["highRiskThreshold"], 80);
    assert_eq!(body["weeklySummary"], true);

    // And the backing file carries the persisted entity
    let on_disk = tokio::fs::read(&app.settings_path)
        .await
        .expect("Settings file missing");
    let stored: serde_json::Value =
        serde_json::from_slice(&on_disk).expect("Settings file is not valid JSON");
    assert_eq!(stored["highRiskThreshold"], 80);

    app.cleanup().await;
}

#[tokio::test]
async fn out_of_range_threshold_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut payload: serde_json::Value = client
        .get(format!("{}/api/settings", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    payload["highRiskThreshold"] = serde_json::json!(150);

    let response = client
        .put(format!("{}/api/settings", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    app.cleanup().await;
}
