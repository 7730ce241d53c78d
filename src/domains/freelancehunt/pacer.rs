//! Outbound request pacing.
//!
//! The Freelancehunt API throttles aggressive clients, so every request made
//! by a [`FreelancehuntClient`](super::FreelancehuntClient) goes through a
//! [`RequestPacer`]. The pacer enforces a fixed minimum gap between the end of
//! one request and the start of the next. There is no burst allowance.
//!
//! The mutex is held for the whole exchange, which also serializes requests:
//! concurrent callers queue up and are released one at a time.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Fixed-delay request pacer.
#[derive(Debug)]
pub struct RequestPacer {
    min_delay: Duration,
    last_completed: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Create a pacer enforcing `min_delay` between consecutive requests.
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_completed: Mutex::new(None),
        }
    }

    /// Run `request` once the pacing window allows it.
    ///
    /// The completion time is recorded whether the request succeeds or not.
    pub async fn run<F, Fut, T>(&self, request: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut last_completed = self.last_completed.lock().await;

        if let Some(previous) = *last_completed {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                let wait = self.min_delay - elapsed;
                debug!("Pacing outbound request, sleeping {:?}", wait);
                sleep(wait).await;
            }
        }

        let output = request().await;
        *last_completed = Some(Instant::now());
        output
    }
}
