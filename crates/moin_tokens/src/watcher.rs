//! Polling watcher for OS appearance changes
//!
//! Desktop environments do not share a portable change notification, so the
//! watcher polls [`detect_system_color_scheme`] on a background thread and
//! forwards changes through an [`AppearanceNotifier`].

use crate::platform::{detect_system_color_scheme, AppearanceNotifier};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Watcher settings
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    /// Delay between two OS queries
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Background thread reporting OS scheme changes
///
/// Dropping the watcher asks the thread to stop; [`SystemSchemeWatcher::stop`]
/// additionally waits for it.
pub struct SystemSchemeWatcher {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemSchemeWatcher {
    pub fn start(notifier: AppearanceNotifier, config: WatcherConfig) -> std::io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = std::thread::Builder::new()
            .name("moin-scheme-watcher".into())
            .spawn(move || {
                let mut last = detect_system_color_scheme();
                tracing::debug!("scheme watcher started at {:?}", last);
                while flag.load(Ordering::SeqCst) {
                    std::thread::sleep(config.poll_interval);
                    let current = detect_system_color_scheme();
                    if current == last {
                        continue;
                    }
                    last = current;
                    if !notifier.notify(current) {
                        tracing::debug!("token store dropped, stopping scheme watcher");
                        break;
                    }
                }
            })?;

        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop polling and wait for the thread to exit.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("scheme watcher thread panicked");
            }
        }
    }
}

impl Drop for SystemSchemeWatcher {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
