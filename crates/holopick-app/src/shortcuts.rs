//! Keyboard shortcut registry and documentation.

use winit::keyboard::{Key, NamedKey};

use crate::ui::{UiAction, UiState};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    /// Builds the action from the current overlay state.
    pub action: fn(&UiState) -> UiAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: fn(&UiState) -> UiAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+C").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    pub fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && self.shift == shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Enter", false, false, "Commit the current color", |_| UiAction::Commit),
            Shortcut::new("Escape", false, false, "Revert to the old color", |_| {
                UiAction::RevertToOld
            }),
            Shortcut::new("C", true, false, "Copy color as hex", |_| UiAction::CopyHex),
            Shortcut::new("V", true, false, "Paste a hex color", |_| UiAction::PasteHex),
            Shortcut::new("O", false, false, "Toggle the old color swatch", |state| {
                UiAction::SetShowOldColor(!state.show_old_color)
            }),
            Shortcut::new("T", false, false, "Toggle touch-anywhere on the ring", |state| {
                UiAction::SetTouchAnywhere(!state.touch_anywhere)
            }),
        ]
    }

    /// The shortcut bound to `key` with these modifiers.
    pub fn find(key: &str, ctrl: bool, shift: bool) -> Option<Shortcut> {
        Self::all().into_iter().find(|s| s.matches(key, ctrl, shift))
    }

    /// Log all shortcuts.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:12} {}", shortcut.format(), shortcut.description);
        }
    }
}

/// Name a winit key the way shortcuts spell it.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(NamedKey::Enter) => Some("Enter".to_string()),
        Key::Named(NamedKey::Escape) => Some("Escape".to_string()),
        Key::Character(c) => Some(c.to_uppercase()),
        _ => None,
    }
}
