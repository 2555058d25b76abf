use async_trait::async_trait;
use tracing::error;

use crate::logging::logger::{ErrorReport, ErrorReporter};

/// Development provider: writes to the operator console and nothing else.
pub struct ConsoleReporter;

#[async_trait]
impl ErrorReporter for ConsoleReporter {
    async fn report(&self, message: &str, report: &ErrorReport) {
        error!(kind = %report.kind, detail = %report.detail, "{message}");
    }
}
