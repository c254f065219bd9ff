use crate::config::{DEFAULT_FEED_UNIT, DEFAULT_TIMEOUT_SECS};
use crate::core::estimator::DEFAULT_FEED_CONVERSION_RATIO;
use crate::core::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_positive_ratio, validate_url,
    Validate,
};
use std::env;

/// Environment-driven configuration, for hosts that wire the estimator in
/// through an `.env`-style surface rather than flags or a file.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub feed_conversion_ratio: f64,
    pub feed_unit: String,
    pub use_predictor: bool,
    pub predictor_base_url: Option<String>,
    pub model_path: Option<String>,
    pub request_timeout_secs: u64,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        let use_predictor = env::var("FEEDPLAN_USE_PREDICTOR")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let predictor_base_url = env::var("FEEDPLAN_PREDICTOR_URL").ok();
        if use_predictor && predictor_base_url.is_none() {
            return Err(FeedError::ConfigError {
                message: "FEEDPLAN_PREDICTOR_URL is required when FEEDPLAN_USE_PREDICTOR is set"
                    .to_string(),
            });
        }

        Ok(Self {
            feed_conversion_ratio: env::var("FEEDPLAN_FCR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FEED_CONVERSION_RATIO),
            feed_unit: env::var("FEEDPLAN_FEED_UNIT")
                .unwrap_or_else(|_| DEFAULT_FEED_UNIT.to_string()),
            use_predictor,
            predictor_base_url,
            model_path: env::var("FEEDPLAN_MODEL_PATH").ok(),
            request_timeout_secs: env::var("FEEDPLAN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

impl ConfigProvider for EnvConfig {
    fn feed_conversion_ratio(&self) -> f64 {
        self.feed_conversion_ratio
    }

    fn feed_unit(&self) -> &str {
        &self.feed_unit
    }

    fn use_predictor(&self) -> bool {
        self.use_predictor
    }

    fn predictor_base_url(&self) -> Option<&str> {
        self.predictor_base_url.as_deref()
    }

    fn model_path(&self) -> Option<&str> {
        self.model_path.as_deref()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_ratio("FEEDPLAN_FCR", self.feed_conversion_ratio)?;
        validate_non_empty_string("FEEDPLAN_FEED_UNIT", &self.feed_unit)?;
        validate_positive_number("FEEDPLAN_TIMEOUT_SECS", self.request_timeout_secs, 1)?;

        if let Some(url) = &self.predictor_base_url {
            validate_url("FEEDPLAN_PREDICTOR_URL", url)?;
        }

        Ok(())
    }
}
