//! HTTP implementation of [`PayrollApi`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::DeskConfig;
use crate::error::{DeskError, DeskResult};
use crate::models::{ApprovalUpdate, AttendanceRecord, PayPeriod, PayRun, Session};

use super::PayrollApi;

/// Error body the payroll API sends with non-2xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Network client for the payroll API.
///
/// # Example
///
/// ```no_run
/// use payrun_desk::client::HttpPayrollApi;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let api = HttpPayrollApi::new("http://localhost:5050", Duration::from_secs(30))?;
/// assert_eq!(api.base_url(), "http://localhost:5050");
/// # Ok::<(), payrun_desk::error::DeskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpPayrollApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpPayrollApi {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> DeskResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Creates a client from the desk configuration.
    pub fn from_config(config: &DeskConfig) -> DeskResult<Self> {
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    /// Attaches the session token as a bearer credential to every request.
    pub fn with_session(mut self, session: &Session) -> Self {
        self.token = Some(session.token.clone());
        self
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn period_query(period: &PayPeriod) -> [(&'static str, String); 2] {
        [
            ("startDate", period.start_param()),
            ("endDate", period.end_param()),
        ]
    }

    async fn check_status(response: Response) -> DeskResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) if text.is_empty() => status.to_string(),
            Err(_) => text,
        };
        warn!(status = status.as_u16(), error = %message, "Payroll API returned an error");
        Err(DeskError::Network {
            status: Some(status.as_u16()),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> DeskResult<T> {
        let response = Self::check_status(req.send().await?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PayrollApi for HttpPayrollApi {
    async fn attendance_by_period(&self, period: &PayPeriod) -> DeskResult<Vec<AttendanceRecord>> {
        debug!(period = %period, "Fetching attendance");
        let req = self
            .request(Method::GET, "/time-and-attendance/by-period")
            .query(&Self::period_query(period));
        Self::send_json(req).await
    }

    async fn list_pay_runs(&self) -> DeskResult<Vec<PayRun>> {
        debug!("Fetching all pay runs");
        Self::send_json(self.request(Method::GET, "/pay-run/all")).await
    }

    async fn process_pay_run(&self, period: &PayPeriod) -> DeskResult<()> {
        debug!(period = %period, "Requesting pay run processing");
        let req = self
            .request(Method::POST, "/pay-run/process")
            .query(&Self::period_query(period));
        Self::check_status(req.send().await?).await?;
        Ok(())
    }

    async fn update_approval(&self, update: &ApprovalUpdate) -> DeskResult<()> {
        debug!(pay_run_id = %update.pay_run_id, state = %update.state(), "Updating approval");
        let req = self.request(Method::PUT, "/pay-run/approve").json(update);
        Self::check_status(req.send().await?).await?;
        Ok(())
    }

    fn for_session(&self, session: Option<&Session>) -> Arc<dyn PayrollApi> {
        Arc::new(Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: session.map(|s| s.token.clone()),
        })
    }
}
