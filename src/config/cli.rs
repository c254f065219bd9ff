use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_positive_ratio,
    validate_required_field, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "feedplan")]
#[command(about = "Feed-requirement estimation for livestock weight tracking")]
pub struct CliConfig {
    /// Identifier of the animal to estimate for
    #[arg(long)]
    pub subject_id: String,

    /// Current live weight
    #[arg(long)]
    pub current_weight: f64,

    /// Target live weight; required for the built-in linear estimate
    #[arg(long)]
    pub target_weight: Option<f64>,

    /// Number of days to reach the target weight
    #[arg(long, default_value = "30")]
    pub horizon_days: u32,

    /// Feed conversion ratio: feed mass per unit of live-weight gain
    #[arg(long, default_value = "3.5")]
    pub fcr: f64,

    /// Unit reported with the recommendation
    #[arg(long, default_value = "kg")]
    pub unit: String,

    /// Delegate to a remote prediction service instead of the linear formula
    #[arg(long)]
    pub use_predictor: bool,

    /// Base URL of the remote prediction service
    #[arg(long)]
    pub predictor_url: Option<String>,

    /// Path to a locally stored model artifact, passed through unparsed
    #[arg(long)]
    pub model_path: Option<String>,

    /// Timeout for remote predictor requests, in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Load estimator/predictor settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_conversion_ratio(&self) -> f64 {
        self.fcr
    }

    fn feed_unit(&self) -> &str {
        &self.unit
    }

    fn use_predictor(&self) -> bool {
        self.use_predictor
    }

    fn predictor_base_url(&self) -> Option<&str> {
        self.predictor_url.as_deref()
    }

    fn model_path(&self) -> Option<&str> {
        self.model_path.as_deref()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_ratio("fcr", self.fcr)?;
        validate_non_empty_string("unit", &self.unit)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;

        if self.use_predictor {
            let url = validate_required_field("predictor_url", &self.predictor_url)?;
            validate_url("predictor_url", url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            subject_id: "cow-17".to_string(),
            current_weight: 450.5,
            target_weight: Some(460.0),
            horizon_days: 30,
            fcr: 3.5,
            unit: "kg".to_string(),
            use_predictor: false,
            predictor_url: None,
            model_path: None,
            timeout_secs: 10,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_predictor_requires_url() {
        let mut config = base_config();
        config.use_predictor = true;
        assert!(config.validate().is_err());

        config.predictor_url = Some("http://predictor.local:8000".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_fcr_rejected() {
        let mut config = base_config();
        config.fcr = 0.0;
        assert!(config.validate().is_err());
    }
}
