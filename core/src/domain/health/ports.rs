use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::ReadinessStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<ReadinessStatus, CoreError>> + Send;
}
