use crate::config::{DEFAULT_FEED_UNIT, DEFAULT_TIMEOUT_SECS};
use crate::core::estimator::DEFAULT_FEED_CONVERSION_RATIO;
use crate::core::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_positive_ratio,
    validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub estimator: EstimatorSection,
    pub predictor: Option<PredictorSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSection {
    #[serde(default = "default_fcr")]
    pub feed_conversion_ratio: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorSection {
    pub enabled: bool,
    pub base_url: Option<String>,
    pub model_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_fcr() -> f64 {
    DEFAULT_FEED_CONVERSION_RATIO
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
            .map_err(|e| FeedError::ConfigError {
                message: format!("Failed to parse {}: {}", path, e),
            })
    }

    fn from_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl ConfigProvider for TomlConfig {
    fn feed_conversion_ratio(&self) -> f64 {
        self.estimator.feed_conversion_ratio
    }

    fn feed_unit(&self) -> &str {
        self.estimator.unit.as_deref().unwrap_or(DEFAULT_FEED_UNIT)
    }

    fn use_predictor(&self) -> bool {
        self.predictor.as_ref().is_some_and(|p| p.enabled)
    }

    fn predictor_base_url(&self) -> Option<&str> {
        self.predictor.as_ref().and_then(|p| p.base_url.as_deref())
    }

    fn model_path(&self) -> Option<&str> {
        self.predictor.as_ref().and_then(|p| p.model_path.as_deref())
    }

    fn request_timeout_secs(&self) -> u64 {
        self.predictor
            .as_ref()
            .and_then(|p| p.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_ratio("feed_conversion_ratio", self.estimator.feed_conversion_ratio)?;
        if let Some(unit) = &self.estimator.unit {
            validate_non_empty_string("unit", unit)?;
        }

        if let Some(predictor) = &self.predictor {
            if predictor.enabled {
                let url = validate_required_field("predictor.base_url", &predictor.base_url)?;
                validate_url("predictor.base_url", url)?;
            }
            if let Some(timeout) = predictor.timeout_secs {
                validate_positive_number("predictor.timeout_secs", timeout, 1)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_str(
            r#"
[estimator]
feed_conversion_ratio = 4.2
unit = "lb"

[predictor]
enabled = true
base_url = "http://predictor.local:8000"
model_path = "/var/models/feed-v2.onnx"
timeout_secs = 5
"#,
        )
        .unwrap();

        assert_eq!(config.feed_conversion_ratio(), 4.2);
        assert_eq!(config.feed_unit(), "lb");
        assert!(config.use_predictor());
        assert_eq!(
            config.predictor_base_url(),
            Some("http://predictor.local:8000")
        );
        assert_eq!(config.model_path(), Some("/var/models/feed-v2.onnx"));
        assert_eq!(config.request_timeout_secs(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply() {
        let config = TomlConfig::from_str("[estimator]\n").unwrap();

        assert_eq!(
            config.feed_conversion_ratio(),
            DEFAULT_FEED_CONVERSION_RATIO
        );
        assert_eq!(config.feed_unit(), DEFAULT_FEED_UNIT);
        assert!(!config.use_predictor());
        assert_eq!(config.request_timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_predictor_requires_base_url() {
        let config = TomlConfig::from_str(
            r#"
[estimator]

[predictor]
enabled = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[estimator]\nfeed_conversion_ratio = 2.8").unwrap();

        let config = TomlConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.feed_conversion_ratio(), 2.8);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let err = TomlConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FeedError::ConfigError { .. }));
    }
}
