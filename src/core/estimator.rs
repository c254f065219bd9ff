use crate::domain::model::{FeedEstimateRequest, FeedEstimateResult, FeedPeriod};
use crate::domain::ports::Predictor;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{validate_horizon, validate_positive_ratio, validate_weight};

/// Example value; real ratios vary by species and feed type, so callers
/// always pass one in explicitly.
pub const DEFAULT_FEED_CONVERSION_RATIO: f64 = 3.5;

/// Converts a weight-gain target into a recommended total feed mass using a
/// fixed feed-conversion ratio. Pure arithmetic, no state.
#[derive(Debug, Clone)]
pub struct FeedEstimator {
    feed_conversion_ratio: f64,
}

impl FeedEstimator {
    pub fn new(feed_conversion_ratio: f64) -> Result<Self> {
        validate_positive_ratio("feed_conversion_ratio", feed_conversion_ratio)?;
        Ok(Self {
            feed_conversion_ratio,
        })
    }

    pub fn feed_conversion_ratio(&self) -> f64 {
        self.feed_conversion_ratio
    }

    /// Total feed mass recommended to move `current_weight` to
    /// `target_weight` over `horizon_days`. Computed via the per-day gain,
    /// which is algebraically `(target - current) * ratio`.
    pub fn estimate(
        &self,
        current_weight: f64,
        target_weight: f64,
        horizon_days: u32,
    ) -> Result<f64> {
        validate_weight("current_weight", current_weight)?;
        validate_weight("target_weight", target_weight)?;
        validate_horizon("horizon_days", horizon_days)?;

        let daily_gain = (target_weight - current_weight) / horizon_days as f64;
        Ok(daily_gain * self.feed_conversion_ratio * horizon_days as f64)
    }
}

/// The built-in strategy: the linear formula above, exposed behind the
/// `Predictor` interface so callers can swap in a remote service unchanged.
#[derive(Debug)]
pub struct LinearPredictor {
    estimator: FeedEstimator,
    unit: String,
}

impl LinearPredictor {
    pub fn new(estimator: FeedEstimator, unit: impl Into<String>) -> Self {
        Self {
            estimator,
            unit: unit.into(),
        }
    }
}

#[async_trait::async_trait]
impl Predictor for LinearPredictor {
    async fn predict(&self, request: &FeedEstimateRequest) -> Result<FeedEstimateResult> {
        let target_weight =
            request
                .target_weight
                .ok_or_else(|| FeedError::InvalidArgument {
                    field: "target_weight".to_string(),
                    reason: "required for the linear estimate".to_string(),
                })?;

        let recommended_feed =
            self.estimator
                .estimate(request.current_weight, target_weight, request.horizon_days)?;

        // Linear model: feed is spread uniformly across the horizon.
        let per_day = recommended_feed / request.horizon_days as f64;
        let breakdown = (1..=request.horizon_days)
            .map(|day| FeedPeriod {
                day,
                feed_mass: per_day,
            })
            .collect();

        Ok(FeedEstimateResult {
            recommended_feed,
            unit: self.unit.clone(),
            confidence: None,
            breakdown: Some(breakdown),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator(ratio: f64) -> FeedEstimator {
        FeedEstimator::new(ratio).unwrap()
    }

    #[test]
    fn test_documented_example() {
        let result = estimator(3.5).estimate(450.5, 460.0, 30).unwrap();
        assert!((result - 33.25).abs() < 1e-9);
    }

    #[test]
    fn test_matches_simplified_form() {
        let est = estimator(3.5);
        for &(current, target, horizon) in &[
            (450.5, 460.0, 30u32),
            (0.0, 100.0, 7),
            (320.25, 310.0, 90),
            (1.0, 1.5, 1),
        ] {
            let via_daily = est.estimate(current, target, horizon).unwrap();
            let simplified = (target - current) * 3.5;
            assert!(
                (via_daily - simplified).abs() < 1e-9,
                "mismatch for ({}, {}, {})",
                current,
                target,
                horizon
            );
        }
    }

    #[test]
    fn test_zero_gap_gives_zero_feed() {
        let est = estimator(3.5);
        for &days in &[1u32, 30, 365] {
            assert_eq!(est.estimate(500.0, 500.0, days).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_linear_in_weight_gap() {
        let est = estimator(2.0);
        let single = est.estimate(100.0, 110.0, 20).unwrap();
        let doubled = est.estimate(100.0, 120.0, 20).unwrap();
        assert!((doubled - 2.0 * single).abs() < 1e-9);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = estimator(3.5).estimate(450.5, 460.0, 0).unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument { ref field, .. } if field == "horizon_days"));
    }

    #[test]
    fn test_negative_weights_rejected() {
        let est = estimator(3.5);
        assert!(est.estimate(-1.0, 460.0, 30).is_err());
        assert!(est.estimate(450.5, -1.0, 30).is_err());
        assert!(est.estimate(f64::NAN, 460.0, 30).is_err());
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        assert!(FeedEstimator::new(0.0).is_err());
        assert!(FeedEstimator::new(-3.5).is_err());
        assert!(FeedEstimator::new(f64::NAN).is_err());
    }

    #[tokio::test]
    async fn test_linear_predictor_breakdown_sums_to_total() {
        let predictor = LinearPredictor::new(estimator(3.5), "kg");
        let request = FeedEstimateRequest::new("cow-17", 450.5, Some(460.0), 30);

        let result = predictor.predict(&request).await.unwrap();
        assert!((result.recommended_feed - 33.25).abs() < 1e-9);
        assert_eq!(result.unit, "kg");
        assert!(result.confidence.is_none());

        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.len(), 30);
        let total: f64 = breakdown.iter().map(|p| p.feed_mass).sum();
        assert!((total - result.recommended_feed).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_linear_predictor_requires_target_weight() {
        let predictor = LinearPredictor::new(estimator(3.5), "kg");
        let request = FeedEstimateRequest::new("cow-17", 450.5, None, 30);

        let err = predictor.predict(&request).await.unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument { ref field, .. } if field == "target_weight"));
    }
}
