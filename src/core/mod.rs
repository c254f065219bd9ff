pub mod engine;
pub mod estimator;

pub use crate::domain::model::{
    FeedEstimateRequest, FeedEstimateResult, FeedPeriod, WeightObservation,
};
pub use crate::domain::ports::{ConfigProvider, Predictor, WeightSource};
pub use crate::utils::error::Result;
