//! Reports vertical slice: read-time projections over employee records.

mod client;
mod new_hires;

pub use client::EmployeeApiClient;
pub use new_hires::{NewHire, SourceEmployee, days_since_hire, new_hires, today};

use platform_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsError {
    #[error("invalid employee service url: {0}")]
    InvalidUrl(String),
    #[error("employee service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("employee service answered with status {0}")]
    UpstreamStatus(u16),
}

pub type ReportsResult<T> = Result<T, ReportsError>;

impl From<ReportsError> for ApiError {
    fn from(err: ReportsError) -> Self {
        match err {
            ReportsError::InvalidUrl(_) => ApiError::internal(err.into()),
            ReportsError::Request(_) | ReportsError::UpstreamStatus(_) => {
                ApiError::Upstream(err.to_string())
            }
        }
    }
}
