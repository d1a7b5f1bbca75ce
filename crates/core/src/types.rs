use serde::Serialize;
use serde_json::Value;

use crate::error::SubmitError;

/// Accepted submission, echoing the caller's payload untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmitSuccess {
    pub ok: bool,
    pub data: Value,
}

impl SubmitSuccess {
    pub fn new(data: Value) -> Self {
        Self { ok: true, data }
    }
}

/// Result of one submission attempt.
pub type Outcome = Result<SubmitSuccess, SubmitError>;
