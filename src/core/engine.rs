use crate::core::{FeedEstimateRequest, FeedEstimateResult, Predictor, WeightSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_horizon, validate_weight};

/// Drives one estimate end to end: validate the request, fill in recent
/// history if the strategy wants it, then delegate to the predictor.
pub struct AdvisorEngine<P: Predictor> {
    predictor: P,
    history_source: Option<Box<dyn WeightSource>>,
}

impl<P: Predictor> AdvisorEngine<P> {
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            history_source: None,
        }
    }

    pub fn with_history_source(predictor: P, history_source: Box<dyn WeightSource>) -> Self {
        Self {
            predictor,
            history_source: Some(history_source),
        }
    }

    pub async fn run(&self, mut request: FeedEstimateRequest) -> Result<FeedEstimateResult> {
        validate_weight("current_weight", request.current_weight)?;
        if let Some(target_weight) = request.target_weight {
            validate_weight("target_weight", target_weight)?;
        }
        validate_horizon("horizon_days", request.horizon_days)?;

        if request.recent_history.is_empty() && self.predictor.wants_history() {
            if let Some(source) = &self.history_source {
                tracing::debug!("Fetching weight history for {}", request.subject_id);
                request.recent_history = source.fetch_history(&request.subject_id).await?;
                tracing::debug!("Fetched {} observations", request.recent_history.len());
            }
        }

        tracing::info!(
            "Estimating feed for {} over {} days",
            request.subject_id,
            request.horizon_days
        );
        let result = self.predictor.predict(&request).await?;
        tracing::info!(
            "Recommended feed: {:.2} {}",
            result.recommended_feed,
            result.unit
        );

        Ok(result)
    }
}
