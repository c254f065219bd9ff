use crate::domain::model::{FeedEstimateRequest, FeedEstimateResult, WeightObservation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Any component that maps weight inputs to a recommended feed quantity.
/// Exactly one implementation is active at a time; callers swap strategies
/// behind this trait.
#[async_trait]
pub trait Predictor: Send + Sync + std::fmt::Debug {
    async fn predict(&self, request: &FeedEstimateRequest) -> Result<FeedEstimateResult>;

    /// Whether this strategy makes use of recent weight history in the
    /// request. The engine skips the history fetch when it doesn't.
    fn wants_history(&self) -> bool {
        false
    }
}

#[async_trait]
impl<P: Predictor + ?Sized> Predictor for Box<P> {
    async fn predict(&self, request: &FeedEstimateRequest) -> Result<FeedEstimateResult> {
        (**self).predict(request).await
    }

    fn wants_history(&self) -> bool {
        (**self).wants_history()
    }
}

/// Read-only access to historical weight observations for one animal.
#[async_trait]
pub trait WeightSource: Send + Sync {
    async fn fetch_history(&self, subject_id: &str) -> Result<Vec<WeightObservation>>;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_conversion_ratio(&self) -> f64;
    fn feed_unit(&self) -> &str;
    fn use_predictor(&self) -> bool;
    fn predictor_base_url(&self) -> Option<&str>;
    fn model_path(&self) -> Option<&str>;
    fn request_timeout_secs(&self) -> u64;
}
