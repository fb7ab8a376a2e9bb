//! Counter server state.

use std::sync::Arc;

use tokio::sync::Mutex;

/// Process-wide request counter shared by all handlers.
///
/// Both operations take the same lock and hold it only for the read or the
/// read-modify-write, so concurrent increments are never lost.
#[derive(Clone, Default)]
pub struct SharedCounter {
    count: Arc<Mutex<u64>>,
}

impl SharedCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one and returns the new value.
    pub async fn increment(&self) -> u64 {
        let mut count = self.count.lock().await;
        *count += 1;
        *count
    }

    /// Current value.
    pub async fn get(&self) -> u64 {
        *self.count.lock().await
    }
}
