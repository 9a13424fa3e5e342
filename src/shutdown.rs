use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared quit flag observed by the input thread, the loader and the UI loop.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Register before reading the flag; notify_waiters() only wakes
        // registered waiters.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

/// Flip `shutdown` on SIGINT / SIGTERM.
///
/// In raw mode Ctrl+C arrives as a key press instead; this covers signals
/// sent from outside the terminal.
pub fn spawn_signal_watcher(shutdown: ShutdownHandle) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut term = match signal(SignalKind::terminate()) {
                Ok(term) => term,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                    let _ = tokio::signal::ctrl_c().await;
                    shutdown.signal();
                    return;
                }
            };
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
                _ = shutdown.wait() => return,
            }
        }
        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = shutdown.wait() => return,
            }
        }
        shutdown.signal();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_sticky_and_shared() {
        let handle = ShutdownHandle::new();
        let clone = handle.clone();
        assert!(!clone.is_shutting_down());
        handle.signal();
        handle.signal();
        assert!(clone.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let handle = ShutdownHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait() did not return")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signaled() {
        let handle = ShutdownHandle::new();
        handle.signal();
        tokio::time::timeout(Duration::from_millis(100), handle.wait())
            .await
            .expect("wait() blocked after signal");
    }
}
