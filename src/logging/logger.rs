use std::sync::Arc;

use async_trait::async_trait;

use crate::logging::providers::console::ConsoleReporter;
use crate::logging::providers::monitoring_api::MonitoringApiClient;
use crate::settings::{Environment, Settings};

/// What the sink is given for one unhandled error: the error kind plus its
/// rendered detail. Cloned into response extensions by the error layer.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub kind: String,
    pub detail: String,
}

/// Single capability every provider implements. Reporting must never fail
/// the request that triggered it; providers swallow their own errors.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, message: &str, error: &ErrorReport);
}

/// Picks the active provider once at boot. Console locally, the monitoring
/// API in production. No runtime switching.
pub fn build_reporter(settings: &Settings) -> Arc<dyn ErrorReporter> {
    match settings.environment {
        Environment::Development => Arc::new(ConsoleReporter),
        Environment::Production => Arc::new(MonitoringApiClient::new(
            settings.monitoring_endpoint.clone(),
            settings.monitoring_api_key.clone(),
        )),
    }
}
