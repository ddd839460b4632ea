use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::{ReportsError, ReportsResult, SourceEmployee};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads employee records from the employee service REST API.
#[derive(Clone, Debug)]
pub struct EmployeeApiClient {
    http: Client,
    base: Url,
}

impl EmployeeApiClient {
    pub fn new(base_url: &str) -> ReportsResult<Self> {
        let mut raw = base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|err| ReportsError::InvalidUrl(err.to_string()))?;
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    #[instrument(name = "reports.fetch_employees", skip_all, fields(base = %self.base))]
    pub async fn fetch_employees(&self) -> ReportsResult<Vec<SourceEmployee>> {
        let url = self
            .base
            .join("api/employees")
            .map_err(|err| ReportsError::InvalidUrl(err.to_string()))?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReportsError::UpstreamStatus(status.as_u16()));
        }
        let employees: Vec<SourceEmployee> = response.json().await?;
        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }
}
