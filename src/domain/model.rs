use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single historical weight measurement for one animal. Immutable; created
/// by an external data-entry process and read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightObservation {
    pub subject_id: String,
    pub weight: f64,
    pub measured_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One page of weight history as served by `GET /weight/data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightDataPage {
    pub data: Vec<WeightObservation>,
    pub total_records: usize,
}

/// Input to a feed estimate. Constructed per call, never persisted.
/// `recent_history` is only populated when the active predictor wants it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEstimateRequest {
    pub subject_id: String,
    pub current_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    pub horizon_days: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_history: Vec<WeightObservation>,
}

impl FeedEstimateRequest {
    pub fn new(
        subject_id: impl Into<String>,
        current_weight: f64,
        target_weight: Option<f64>,
        horizon_days: u32,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            current_weight,
            target_weight,
            horizon_days,
            recent_history: Vec::new(),
        }
    }
}

/// Outcome of a feed estimate, returned to the caller and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEstimateResult {
    pub recommended_feed: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<FeedPeriod>>,
}

/// Feed allocated to one day of the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPeriod {
    pub day: u32,
    pub feed_mass: f64,
}
