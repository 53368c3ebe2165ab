//! [`Recorder`] for asserting which handlers ran, and in what order.

use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, shared log of events.
///
/// Clones share the same log, so a clone can be moved into each handler
/// closure while the test keeps one to assert on.
///
/// ```rust
/// use story_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let handle = recorder.clone();
/// handle.record("h1");
/// assert_eq!(recorder.events(), vec!["h1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: impl Into<String>) {
        self.lock().push(event.into());
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Whether `event` was recorded at least once.
    pub fn contains(&self, event: &str) -> bool {
        self.lock().iter().any(|e| e == event)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking handler must not hide the events recorded before it.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
