// Adapters layer: concrete implementations for external systems (remote
// predictor, weight-history API).

pub mod http;

use crate::core::estimator::{FeedEstimator, LinearPredictor};
use crate::domain::ports::{ConfigProvider, Predictor};
use crate::utils::error::{FeedError, Result};
use self::http::RemotePredictor;

/// Builds the active strategy from configuration. Remote when the predictor
/// toggle is on, the built-in linear formula otherwise.
pub fn predictor_from_config(config: &dyn ConfigProvider) -> Result<Box<dyn Predictor>> {
    if config.use_predictor() {
        let base_url =
            config
                .predictor_base_url()
                .ok_or_else(|| FeedError::MissingConfigError {
                    field: "predictor_base_url".to_string(),
                })?;
        tracing::debug!("Using remote predictor at {}", base_url);
        Ok(Box::new(RemotePredictor::new(
            base_url,
            config.request_timeout_secs(),
        )?))
    } else {
        tracing::debug!(
            "Using linear estimator with FCR {}",
            config.feed_conversion_ratio()
        );
        let estimator = FeedEstimator::new(config.feed_conversion_ratio())?;
        Ok(Box::new(LinearPredictor::new(
            estimator,
            config.feed_unit().to_string(),
        )))
    }
}
