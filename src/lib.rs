pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{EnvConfig, TomlConfig};

pub use crate::core::engine::AdvisorEngine;
pub use crate::core::estimator::{FeedEstimator, LinearPredictor};
pub use crate::domain::model::{
    FeedEstimateRequest, FeedEstimateResult, FeedPeriod, WeightObservation,
};
pub use crate::domain::ports::{ConfigProvider, Predictor, WeightSource};
pub use crate::utils::error::{FeedError, Result};
