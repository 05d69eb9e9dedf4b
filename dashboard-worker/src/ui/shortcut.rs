//! Keyboard shortcuts

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    FocusSearch,
    ToggleSidebar,
    CloseMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Ctrl must be held. Shortcuts without it fire with or without Ctrl.
    pub ctrl: bool,
    /// `KeyboardEvent.key`, matched exactly
    pub key: &'static str,
    pub command: Command,
    /// Suppress the browser's own binding
    pub prevent_default: bool,
}

pub const SHORTCUTS: [Shortcut; 3] = [
    Shortcut {
        ctrl: true,
        key: "/",
        command: Command::FocusSearch,
        prevent_default: true,
    },
    Shortcut {
        ctrl: true,
        key: "b",
        command: Command::ToggleSidebar,
        prevent_default: true,
    },
    Shortcut {
        ctrl: false,
        key: "Escape",
        command: Command::CloseMenu,
        prevent_default: false,
    },
];

pub fn resolve(ctrl: bool, key: &str) -> Option<Command> {
    SHORTCUTS
        .iter()
        .find(|s| s.key == key && (ctrl || !s.ctrl))
        .map(|s| s.command)
}
