//! Fixed pause between remote calls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Courtesy delay for the remote service. The first call goes out immediately;
/// every later call waits the full `delay` first, so consecutive requests are
/// always at least `delay` apart.
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    calls: AtomicU64,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicU64::new(0),
        }
    }

    /// Call right before each remote request.
    pub async fn wait(&self) {
        let previous = self.calls.fetch_add(1, Ordering::Relaxed);
        if previous > 0 && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Remote calls issued so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}
