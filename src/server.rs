use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Instant;

use crate::conditions::RawConditions;
use crate::error::{PredictError, INVALID_INPUT};
use crate::predictor::Predictor;
use crate::result::PredictionResult;

type ApiError = (StatusCode, Json<Value>);

#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    /// Log every ranked table, not just the leader.
    pub log_table: bool,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            log_table: std::env::var("LOG_PRED").ok().as_deref() == Some("1"),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/predict", post(predict))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "API is running" }))
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<RawConditions>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(raw) = payload.map_err(reject_body)?;
    let started = Instant::now();

    let result = state.predictor.predict_raw(&raw).map_err(|e| {
        tracing::info!("rejected prediction request: {}", e);
        error_response(&e)
    })?;

    if let Some(leader) = result.leader() {
        tracing::info!(
            "predicted compound={} air={:.1} rain={:.1} leader={} ({:.1}) in {:?}",
            result.race_conditions.compound,
            result.race_conditions.air_temp,
            result.race_conditions.rainfall,
            leader.team,
            leader.final_performance,
            started.elapsed()
        );
    }
    if state.log_table {
        for (i, t) in result.teams.iter().enumerate() {
            tracing::info!(
                "  {:>2}. {:<16} {:>5.1} {}",
                i + 1,
                t.team.name(),
                t.final_performance,
                t.advantage.map(|a| a.to_string()).unwrap_or_default()
            );
        }
    }

    Ok(Json(result))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonSyntaxError(_) => {
            "Request must be JSON".to_string()
        }
        other => other.body_text(),
    };
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message, "code": INVALID_INPUT })),
    )
}

fn error_response(err: &PredictError) -> ApiError {
    let status = match err {
        PredictError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PredictError::Transport(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": err.to_string(), "code": err.code() })))
}
