pub mod subscription_service;
pub mod summary_service;

pub use subscription_service::{SubscriptionDraft, SubscriptionService};
pub use summary_service::SummaryService;

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
