use indexmap::IndexSet;

use crate::interaction::events::EventKind;

/// Explicit subscription registry for the controller's event listeners.
///
/// Attach and detach are idempotent: re-attaching an already-registered kind
/// is a no-op, as is detaching an absent one. Removal stays safe under
/// re-entrant option toggles mid-gesture.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListenerRegistry {
    attached: IndexSet<EventKind>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the kind was newly attached.
    pub fn attach(&mut self, kind: EventKind) -> bool {
        self.attached.insert(kind)
    }

    /// Returns `true` when the kind was present and removed.
    pub fn detach(&mut self, kind: EventKind) -> bool {
        self.attached.shift_remove(&kind)
    }

    #[must_use]
    pub fn is_attached(&self, kind: EventKind) -> bool {
        self.attached.contains(&kind)
    }

    /// Attaches or detaches one kind to match `wanted`.
    pub fn sync(&mut self, kind: EventKind, wanted: bool) {
        if wanted {
            self.attach(kind);
        } else {
            self.detach(kind);
        }
    }

    pub fn clear(&mut self) {
        self.attached.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
