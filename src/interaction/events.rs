use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::interaction::gate::Modifiers;

/// Raw input event delivered by the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        point: Point,
        modifiers: Modifiers,
        primary_button: bool,
    },
    PointerMove {
        point: Point,
        modifiers: Modifiers,
    },
    PointerUp {
        point: Point,
        modifiers: Modifiers,
    },
    /// Wheel tick. Some hosts emit duplicate events with no delta; those are
    /// modeled as `delta_y: None` and must be swallowed without side effects.
    Wheel {
        point: Point,
        delta_y: Option<f64>,
        modifiers: Modifiers,
    },
    EscapeKey,
}

impl InputEvent {
    #[must_use]
    pub fn kind(self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::Wheel { .. } => EventKind::Wheel,
            Self::EscapeKey => EventKind::KeyDown,
        }
    }

    #[must_use]
    pub fn point(self) -> Option<Point> {
        match self {
            Self::PointerDown { point, .. }
            | Self::PointerMove { point, .. }
            | Self::PointerUp { point, .. }
            | Self::Wheel { point, .. } => Some(point),
            Self::EscapeKey => None,
        }
    }

    #[must_use]
    pub fn modifiers(self) -> Modifiers {
        match self {
            Self::PointerDown { modifiers, .. }
            | Self::PointerMove { modifiers, .. }
            | Self::PointerUp { modifiers, .. }
            | Self::Wheel { modifiers, .. } => modifiers,
            Self::EscapeKey => Modifiers::NONE,
        }
    }
}

/// Listener registration key, one per subscribable event family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Wheel,
    KeyDown,
}

/// Whether the controller intercepted an event or let it pass through to the
/// host untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Passthrough,
}
