use std::time::{Duration, Instant};

/// Quiet period after the last edit before the text counts as settled.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Collapses a burst of updates into one settled value.
///
/// Every `push` cancels the pending timer and restarts it from zero, so a
/// stream of updates closer together than the window never settles until it
/// pauses. The clock is supplied by the caller.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
    last_settled: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_settled: None,
        }
    }

    /// Starts with `initial` already due, so the first `poll` emits it without waiting.
    pub fn with_initial(initial: T, window: Duration, now: Instant) -> Self {
        Self {
            window,
            pending: Some(Pending {
                value: initial,
                deadline: now,
            }),
            last_settled: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// When the pending value will settle, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the settled value once its quiet window has elapsed.
    ///
    /// A value equal to the previously settled one is swallowed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return None;
        }
        let settled = self.pending.take()?.value;
        if self.last_settled.as_ref() == Some(&settled) {
            return None;
        }
        self.last_settled = Some(settled.clone());
        Some(settled)
    }
}
