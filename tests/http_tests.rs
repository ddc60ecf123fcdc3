/// End-to-end tests: the axum service driven through the HTTP transport
///
/// Run with: cargo test --test http_tests -- --nocapture

use std::sync::Arc;
use std::time::Duration;

use race_predictor::result::FixedHumidity;
use race_predictor::server::{router, AppState};
use race_predictor::transport::{
    predict_all, HttpTransport, PredictionTransport, SimulatedTransport,
};
use race_predictor::{Predictor, RawConditions, TeamId};

fn predictor() -> Predictor {
    Predictor::new(Arc::new(FixedHumidity(58.4)))
}

async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState {
        predictor: predictor(),
        log_table: false,
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_service().await;
    let body: serde_json::Value = reqwest::get(format!("{base}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "API is running");
}

#[tokio::test]
async fn test_http_matches_simulated() {
    println!("\n=== Test: HTTP vs Simulated Transport ===");
    let base = spawn_service().await;
    let http = HttpTransport::new(format!("{base}/api/predict"));
    let local = SimulatedTransport::new(predictor(), Duration::ZERO);

    let raw = RawConditions::from_text("340", "Hard", "35", "10", "200", "15");
    let over_wire = http.predict(&raw).await.unwrap();
    let in_process = local.predict(&raw).await.unwrap();

    assert_eq!(over_wire, in_process);
    assert_eq!(over_wire.teams[0].team, TeamId::RedBullRacing);
    assert_eq!(over_wire.race_conditions.humidity, 58.4);
    println!("✓ Both transports return the same ranking");
}

#[tokio::test]
async fn test_invalid_input_keeps_its_class_over_http() {
    let base = spawn_service().await;
    let http = HttpTransport::new(format!("{base}/api/predict"));

    let mut raw = RawConditions::from_text("340", "Hard", "35", "10", "200", "15");
    raw.air_temperature = None;
    let local = SimulatedTransport::new(predictor(), Duration::ZERO);

    let over_wire = http.predict(&raw).await.unwrap_err();
    let in_process = local.predict(&raw).await.unwrap_err();

    assert!(over_wire.is_invalid_input(), "got {over_wire:?}");
    assert!(in_process.is_invalid_input());
    assert_eq!(over_wire.code(), in_process.code());
    assert_eq!(over_wire.to_string(), "Missing required field: air_temperature");
    assert_eq!(over_wire.to_string(), in_process.to_string());
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let base = spawn_service().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/predict"))
        .body("st_speed=300")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Request must be JSON");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_numbers_accepted_on_the_wire() {
    let base = spawn_service().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/predict"))
        .json(&serde_json::json!({
            "st_speed": 300,
            "compound": "Soft",
            "air_temperature": 20,
            "rainfall": 0,
            "wind_direction": 90,
            "wind_speed": 5
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["teams"].as_array().unwrap().len(), 10);
    assert_eq!(body["raceConditions"]["trackTemp"], 30.0);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let base = spawn_service().await;
    let http = HttpTransport::new(format!("{base}/api/predict"));

    let requests: Vec<RawConditions> = (0..8)
        .map(|i| {
            let air = (10 + i * 4).to_string();
            RawConditions::from_text("320", "Medium", &air, "0", "0", "0")
        })
        .collect();

    let results = predict_all(&http, &requests).await;
    for (i, r) in results.into_iter().enumerate() {
        let r = r.unwrap();
        assert_eq!(r.race_conditions.air_temp, (10 + i * 4) as f64);
        assert_eq!(r.teams.len(), 10);
    }
}
