/// Remembers the last message that was actually delivered and decides
/// whether a freshly computed one is worth sending.
///
/// Status updates and operational-failure reports share this one stream,
/// so a repeating error is suppressed the same way a repeating status is.
#[derive(Debug, Default)]
pub struct TransitionTracker {
    last_sent: String,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `candidate` differs from the previously delivered
    /// message. The initial state is empty, so the first real message
    /// always fires.
    pub fn should_notify(&self, candidate: &str) -> bool {
        self.last_sent != candidate
    }

    /// Call only after a successful delivery; a failed send must leave
    /// the state untouched so the message is retried next iteration.
    pub fn record_sent(&mut self, candidate: &str) {
        self.last_sent = candidate.to_string();
    }
}
