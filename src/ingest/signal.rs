use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use crate::ingest::ports::ContentInvalidation;

const SIGNAL_CAPACITY: usize = 16;

/// Process-wide content-changed broadcast. Each notification carries a
/// monotonically increasing revision; subscribers that lag only need the
/// latest one, so dropped intermediate revisions are harmless.
#[derive(Debug)]
pub struct ContentSignal {
    sender: broadcast::Sender<u64>,
    revision: AtomicU64,
}

impl ContentSignal {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self {
            sender,
            revision: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<u64> {
        self.sender.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

impl Default for ContentSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentInvalidation for ContentSignal {
    fn notify_content_changed(&self) {
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        // No subscribers is not an error.
        let _ = self.sender.send(revision);
        tracing::debug!(revision, "content store invalidated");
    }
}
