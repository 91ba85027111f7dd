//! Cancellable delayed-task primitive.
//!
//! A `Debouncer` holds at most one armed task; arming again or cancelling
//! aborts the previous one, whether it is still sleeping or already
//! running.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Fire-once delayed task with arm/cancel semantics.
#[derive(Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create an idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run after `delay`, superseding any armed or
    /// running task.
    pub fn arm<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Abort the armed task, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    /// Whether a task is armed or still running.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new();

        let counter = fired.clone();
        debouncer.arm(Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::advance(Duration::from_millis(499)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_supersedes_previous_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new();

        for _ in 0..3 {
            let counter = fired.clone();
            debouncer.arm(Duration::from_millis(500), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::advance(Duration::from_millis(200)).await;
        }

        tokio::time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        // Only the final arm survived the quiet period.
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new();

        let counter = fired.clone();
        debouncer.arm(Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_armed());
    }
}
