use std::time::{Duration, Instant};

/// How long a feedback status stays up before falling back to idle
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(2);

/// A single cancellable deadline, polled from the event loop tick.
///
/// Scheduling replaces whatever was pending, so there is never more than
/// one reset outstanding and a replaced deadline can never fire.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a pending deadline was replaced
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline.replace(now + delay).is_some()
    }

    /// Returns true if something was pending
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires (returns true) once when `now` reaches the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
