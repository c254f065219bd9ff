use crate::utils::error::{FeedError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FeedError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Ratios and other strictly-positive floats. Rejects NaN and infinities.
pub fn validate_positive_ratio(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FeedError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Weights are request data, not configuration, so violations surface as
/// `InvalidArgument`. The `!(value >= 0.0)` form also rejects NaN.
pub fn validate_weight(field_name: &str, value: f64) -> Result<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(FeedError::InvalidArgument {
            field: field_name.to_string(),
            reason: format!("weight must be a non-negative number, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_horizon(field_name: &str, horizon_days: u32) -> Result<()> {
    if horizon_days == 0 {
        return Err(FeedError::InvalidArgument {
            field: field_name.to_string(),
            reason: "horizon must be at least one day".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("predictor_url", "https://example.com").is_ok());
        assert!(validate_url("predictor_url", "http://example.com").is_ok());
        assert!(validate_url("predictor_url", "").is_err());
        assert!(validate_url("predictor_url", "invalid-url").is_err());
        assert!(validate_url("predictor_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_secs", 10, 1).is_ok());
        assert!(validate_positive_number("timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_ratio() {
        assert!(validate_positive_ratio("fcr", 3.5).is_ok());
        assert!(validate_positive_ratio("fcr", 0.0).is_err());
        assert!(validate_positive_ratio("fcr", -1.0).is_err());
        assert!(validate_positive_ratio("fcr", f64::NAN).is_err());
        assert!(validate_positive_ratio("fcr", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight("current_weight", 0.0).is_ok());
        assert!(validate_weight("current_weight", 450.5).is_ok());
        assert!(validate_weight("current_weight", -1.0).is_err());
        assert!(validate_weight("current_weight", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_horizon() {
        assert!(validate_horizon("horizon_days", 30).is_ok());
        assert!(validate_horizon("horizon_days", 1).is_ok());
        assert!(validate_horizon("horizon_days", 0).is_err());
    }
}
