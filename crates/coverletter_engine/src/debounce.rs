use std::sync::Arc;
use std::time::Duration;

use letter_logging::{letter_debug, letter_error, letter_trace};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::SnapshotStore;

/// Quiet period before a form snapshot is written.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// Coalesces snapshot writes: each `schedule` cancels the pending write and
/// arms a new one, so at most one timer exists and only the latest snapshot
/// of a burst reaches the store.
pub struct PersistDebouncer {
    runtime: Handle,
    store: Arc<dyn SnapshotStore>,
    key: String,
    delay: Duration,
    pending: Option<PendingWrite>,
}

struct PendingWrite {
    snapshot: Arc<str>,
    task: JoinHandle<()>,
}

impl PersistDebouncer {
    pub fn new(
        runtime: Handle,
        store: Arc<dyn SnapshotStore>,
        key: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            runtime,
            store,
            key: key.into(),
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.task.is_finished())
    }

    pub fn schedule(&mut self, snapshot: String) {
        if let Some(previous) = self.pending.take() {
            previous.task.abort();
            letter_trace!("Superseded pending snapshot write");
        }

        let snapshot: Arc<str> = snapshot.into();
        let store = self.store.clone();
        let key = self.key.clone();
        let delay = self.delay;
        let value = snapshot.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            write_snapshot(store.as_ref(), &key, &value);
        });
        self.pending = Some(PendingWrite { snapshot, task });
    }

    /// Writes a still-pending snapshot immediately.
    pub fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.task.is_finished() {
            return;
        }
        pending.task.abort();
        write_snapshot(self.store.as_ref(), &self.key, &pending.snapshot);
    }
}

fn write_snapshot(store: &dyn SnapshotStore, key: &str, snapshot: &str) {
    match store.save(key, snapshot) {
        Ok(()) => letter_debug!("Persisted snapshot {} ({} bytes)", key, snapshot.len()),
        Err(err) => letter_error!("Failed to persist snapshot {}: {}", key, err),
    }
}
