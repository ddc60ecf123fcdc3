//! Ways of getting a request to the engine.
//!
//! Both transports honour the same contract: boundary record in,
//! [`PredictionResult`] out. Callers pick one at startup and never need to
//! know which.

use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;

use crate::conditions::RawConditions;
use crate::error::{InputError, PredictError, TransportError, INVALID_INPUT};
use crate::predictor::Predictor;
use crate::result::PredictionResult;

#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn predict(&self, request: &RawConditions) -> Result<PredictionResult, PredictError>;
}

/// Runs the engine in-process after an artificial delay.
#[derive(Clone)]
pub struct SimulatedTransport {
    predictor: Predictor,
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(predictor: Predictor, latency: Duration) -> Self {
        Self { predictor, latency }
    }
}

#[async_trait]
impl PredictionTransport for SimulatedTransport {
    async fn predict(&self, request: &RawConditions) -> Result<PredictionResult, PredictError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.predictor.predict_raw(request)
    }
}

/// POSTs the boundary record to a running prediction service.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PredictionTransport for HttpTransport {
    async fn predict(&self, request: &RawConditions) -> Result<PredictionResult, PredictError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("could not read error body from {}: {}", self.endpoint, e);
                    String::new()
                }
            };
            return Err(error_from_body(status.as_u16(), body, &self.endpoint));
        }

        resp.json::<PredictionResult>()
            .await
            .map_err(|e| PredictError::from(TransportError::Decode(e.to_string())))
    }
}

/// Maps a non-success response. A body tagged `INVALID_INPUT` is the service
/// rejecting the conditions, so it keeps that class; anything else is a
/// transport failure.
fn error_from_body(status: u16, body: String, endpoint: &str) -> PredictError {
    let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
    let field = |key: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(|e| e.as_str())
            .map(str::to_string)
    };
    let message = field("error").unwrap_or(body);

    if field("code").as_deref() == Some(INVALID_INPUT) {
        tracing::info!("prediction endpoint {} rejected input: {}", endpoint, message);
        return InputError::Rejected(message).into();
    }
    tracing::warn!("prediction endpoint {} returned {}: {}", endpoint, status, message);
    TransportError::Status { status, message }.into()
}

/// Sends every request concurrently; results come back in request order.
pub async fn predict_all<T>(
    transport: &T,
    requests: &[RawConditions],
) -> Vec<Result<PredictionResult, PredictError>>
where
    T: PredictionTransport + ?Sized,
{
    join_all(requests.iter().map(|r| transport.predict(r))).await
}
