use serde::{Deserialize, Serialize};

/// Modifier key a gesture can require before it is allowed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

/// Modifier flags carried by an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    #[must_use]
    pub fn only(key: ModifierKey) -> Self {
        let mut modifiers = Self::NONE;
        match key {
            ModifierKey::Ctrl => modifiers.ctrl = true,
            ModifierKey::Alt => modifiers.alt = true,
            ModifierKey::Shift => modifiers.shift = true,
            ModifierKey::Meta => modifiers.meta = true,
        }
        modifiers
    }

    #[must_use]
    pub fn holds(self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Meta => self.meta,
        }
    }
}

/// True when the gesture's required modifier is absent from config or held
/// on the event.
#[must_use]
pub fn modifier_pressed(required: Option<ModifierKey>, modifiers: Modifiers) -> bool {
    required.is_none_or(|key| modifiers.holds(key))
}

/// Negation of [`modifier_pressed`], used to short-circuit into rejection
/// callbacks.
#[must_use]
pub fn modifier_blocked(required: Option<ModifierKey>, modifiers: Modifiers) -> bool {
    !modifier_pressed(required, modifiers)
}
