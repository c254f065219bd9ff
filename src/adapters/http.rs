use crate::domain::model::{
    FeedEstimateRequest, FeedEstimateResult, WeightDataPage, WeightObservation,
};
use crate::domain::ports::{Predictor, WeightSource};
use crate::utils::error::{FeedError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| FeedError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })
}

/// Delegates estimation to a remote prediction service over HTTP. Any
/// transport failure or non-success status surfaces as
/// `PredictionUnavailable`; no automatic retry.
#[derive(Debug)]
pub struct RemotePredictor {
    client: Client,
    base_url: String,
}

impl RemotePredictor {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Predictor for RemotePredictor {
    async fn predict(&self, request: &FeedEstimateRequest) -> Result<FeedEstimateResult> {
        let url = format!("{}/weight/predict", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FeedError::PredictionUnavailable {
                message: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        tracing::debug!("Predictor response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::PredictionUnavailable {
                message: format!("predictor returned {}: {}", status, body),
            });
        }

        response
            .json::<FeedEstimateResult>()
            .await
            .map_err(|e| FeedError::PredictionUnavailable {
                message: format!("invalid predictor response: {}", e),
            })
    }

    fn wants_history(&self) -> bool {
        true
    }
}

/// Fetches historical weight observations from the weight-tracking API.
pub struct HttpWeightSource {
    client: Client,
    base_url: String,
}

impl HttpWeightSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeightSource for HttpWeightSource {
    async fn fetch_history(&self, subject_id: &str) -> Result<Vec<WeightObservation>> {
        let url = format!("{}/weight/data", self.base_url);
        tracing::debug!("GET {} for subject {}", url, subject_id);

        let response = self
            .client
            .get(&url)
            .query(&[("subjectId", subject_id)])
            .send()
            .await
            .map_err(|e| FeedError::PredictionUnavailable {
                message: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::PredictionUnavailable {
                message: format!("weight data endpoint returned {}: {}", status, body),
            });
        }

        let page: WeightDataPage =
            response
                .json()
                .await
                .map_err(|e| FeedError::PredictionUnavailable {
                    message: format!("invalid weight data response: {}", e),
                })?;

        tracing::debug!(
            "Received {} of {} weight records",
            page.data.len(),
            page.total_records
        );
        Ok(page.data)
    }
}
