use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::logging::logger::{ErrorReport, ErrorReporter};

const SOURCE: &str = "task-api";
const TAGS: &str = "env:production,service:task-api";

/// Production provider: forwards a structured log entry to the configured
/// monitoring API. Submission failures are logged locally and swallowed so
/// a dead monitoring backend can never escalate into request failures.
pub struct MonitoringApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl MonitoringApiClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        MonitoringApiClient {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl ErrorReporter for MonitoringApiClient {
    async fn report(&self, message: &str, report: &ErrorReport) {
        let entry = json!([{
            "message": message,
            "status": "error",
            "source": SOURCE,
            "tags": TAGS,
            "error": {
                "kind": report.kind,
                "detail": report.detail,
            },
        }]);

        let result = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&entry)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), "monitoring API rejected error report");
            }
            Ok(_) => {}
            Err(e) => warn!("failed to submit error report: {e}"),
        }
    }
}
