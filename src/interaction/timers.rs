/// One-shot timer handle driven by a caller-supplied logical clock.
///
/// Re-arming replaces any pending deadline, which is what gives the wheel
/// completion callback its debounce semantics: each event in a burst pushes
/// the deadline out, so the timer fires once per burst.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    deadline_ms: Option<u64>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the timer to fire `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed, disarming
    /// the timer.
    pub fn fire_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
