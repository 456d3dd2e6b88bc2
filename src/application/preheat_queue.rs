//! Throttled background preheat drain.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::gateway::CdnGateway;

/// Best-effort, rate-limited re-submission of a preheat URL list.
///
/// Runs after the synchronous preheat response has already been rendered,
/// strictly one URL at a time with a fixed inter-item delay to respect the
/// vendor's rate limits. Item failures are logged and swallowed; the user
/// already received the acknowledgment for the synchronous submission.
pub struct BackgroundPreheatQueue {
    delay: Duration,
    running: Arc<AtomicBool>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl BackgroundPreheatQueue {
    /// Default delay between successive items.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    /// Creates a queue with the given inter-item delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            running: Arc::new(AtomicBool::new(true)),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Spawns a fire-and-forget drain over `urls`.
    ///
    /// Returns immediately; the drain never blocks a command response path
    /// and is abandoned on shutdown.
    pub fn enqueue(&self, gateway: Arc<CdnGateway>, urls: Vec<String>) {
        let running = self.running.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            drain(&gateway, &urls, delay, &running).await;
        });

        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Abandons all in-flight drains. Completion is not guaranteed.
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
        for task in self.tasks.lock().drain(..) {
            task.abort();
        }
    }
}

impl Drop for BackgroundPreheatQueue {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn drain(
    gateway: &CdnGateway,
    urls: &[String],
    delay: Duration,
    running: &AtomicBool,
) {
    for (index, url) in urls.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(delay).await;
        }

        if !running.load(Ordering::SeqCst) {
            debug!("Preheat drain cancelled");
            return;
        }

        match gateway.preheat(std::slice::from_ref(url)).await {
            Ok(receipt) => {
                debug!(url = %url, request_id = %receipt.request_id, "Background preheat submitted");
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Background preheat failed, continuing");
            }
        }
    }

    debug!(count = urls.len(), "Preheat drain finished");
}
