use serde::{Deserialize, Serialize};

/// Body of every 400 response: the complete list of violations found in
/// the rejected payload, one message per failing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}
