//! Serialized delivery with bounded, selective retries.
//!
//! One `tokio::sync::Mutex` gate serializes every outbound call in the
//! process — a single network request is in flight at any moment. That
//! trades throughput for staying under the endpoint's rate limits and
//! keeps attempt ordering trivial. The gate is a scoped guard, so it is
//! released on every exit path.
//!
//! Retry policy: a timeout is transient and retried up to `max_retries`
//! more times; any other failure is an application-level rejection and
//! terminates the delivery immediately. Nothing propagates past
//! `deliver` — every outcome collapses to a bool plus a diagnostic.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::DeliveryConfig;
use crate::delivery::endpoint::Endpoint;

/// Sends finished replies through the shared gate.
pub struct Deliverer {
    endpoint: Arc<dyn Endpoint>,
    config: DeliveryConfig,
    /// The process-wide delivery gate.
    gate: Mutex<()>,
}

impl Deliverer {
    pub fn new(endpoint: Arc<dyn Endpoint>, config: DeliveryConfig) -> Self {
        Self {
            endpoint,
            config,
            gate: Mutex::new(()),
        }
    }

    /// Deliver `text` to `chat_id`. Returns `true` on success, `false`
    /// once attempts are exhausted or a fatal error occurs.
    ///
    /// The gate is held for the whole retry loop, so one delivery's
    /// attempts are never interleaved with another's.
    pub async fn deliver(&self, chat_id: i64, text: &str) -> bool {
        let delivery_id = Uuid::new_v4();
        let _gate = self.gate.lock().await;

        let max_attempts = self.config.max_retries + 1;
        for attempt in 1..=max_attempts {
            match self
                .endpoint
                .send(chat_id, text, self.config.attempt_timeout)
                .await
            {
                Ok(()) => {
                    debug!(%delivery_id, chat_id, attempt, "Delivered");
                    return true;
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(%delivery_id, chat_id, attempt, error = %e, "Attempt timed out; retrying");
                }
                Err(e) => {
                    error!(%delivery_id, chat_id, attempt, error = %e, "Delivery failed");
                    return false;
                }
            }
        }
        false
    }
}
