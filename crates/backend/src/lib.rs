use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use regsim_core::{Outcome, SubmitError, SubmitSuccess};

/// Simulated network latency, applied unconditionally to every submission.
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// What the view layer submits registration data through
#[async_trait]
pub trait SubmissionBackend: Send + Sync + 'static {
    /// Settles after the simulated latency; the payload is opaque and is not
    /// inspected beyond echoing it back on success.
    async fn submit(&self, data: Value) -> Outcome;
}

/// In-process stand-in for the registration endpoint.
///
/// Outcomes cycle with period 3 in a fixed order: success, non-field error,
/// email error. Each instance owns its call counter, so callers that need an
/// independent cycle construct a fresh instance.
#[derive(Debug, Default)]
pub struct MockBackend {
    // Atomic so the one-of-each-per-three cycle holds under concurrent callers
    calls: AtomicU64,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionBackend for MockBackend {
    async fn submit(&self, data: Value) -> Outcome {
        tokio::time::sleep(SUBMIT_DELAY).await;
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        match call % 3 {
            0 => {
                info!(call, outcome = "success", "registration accepted");
                Ok(SubmitSuccess::new(data))
            }
            1 => {
                info!(call, outcome = "non_field_error", "registration rejected");
                Err(SubmitError::NonField)
            }
            _ => {
                info!(call, outcome = "email_error", "registration rejected");
                Err(SubmitError::EmailExists)
            }
        }
    }
}
