//! Periodic self-ping to keep a hosted deployment warm
//!
//! Free hosting tiers idle out a service that receives no traffic; a
//! 10-minute self-ping is enough to stay resident. The task is guarded by a
//! one-shot flag so a second start request spawns nothing, and it shares no
//! state with the aggregation pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Interval between self-pings
pub const PING_INTERVAL: Duration = Duration::from_secs(600);

/// Timeout for one ping request
const PING_TIMEOUT: Duration = Duration::from_secs(10);

/// One-shot keep-alive task handle
#[derive(Debug, Default)]
pub struct KeepAlive {
    started: AtomicBool,
}

impl KeepAlive {
    /// Creates an unstarted keep-alive handle
    pub fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// Starts the ping task for the given URL
    ///
    /// # Returns
    /// * `true` - The task was spawned by this call
    /// * `false` - A previous call already started it; nothing was spawned
    pub fn start(&self, url: String) -> bool {
        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        tokio::spawn(async move {
            let client = Client::builder()
                .timeout(PING_TIMEOUT)
                .build()
                .unwrap_or_default();
            let mut interval = tokio::time::interval(PING_INTERVAL);
            // Skip the first tick (immediate)
            interval.tick().await;

            loop {
                interval.tick().await;
                match client.get(&url).send().await {
                    Ok(response) => {
                        debug!(url = %url, status = %response.status(), "keep-alive ping");
                    }
                    Err(err) => {
                        warn!(url = %url, error = %err, "keep-alive ping failed");
                    }
                }
            }
        });
        true
    }

    /// Whether the ping task has been started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}
