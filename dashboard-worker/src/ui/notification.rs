//! Toast notifications
//!
//! Each toast is owned by a [`NotificationTray`] and walks a fixed
//! lifecycle: slide in, stay, slide out, dispose.

use serde::{Deserialize, Serialize};

/// Delay before a new toast slides in
pub const ENTER_DELAY_MS: u64 = 100;
/// Slide-out duration before the toast is removed
pub const EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Font Awesome icon name (without the `fa-` prefix)
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Background colour as a CSS variable reference
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "var(--accent-green)",
            NotificationKind::Error => "var(--accent-red)",
            NotificationKind::Warning => "var(--accent-orange)",
            NotificationKind::Info => "var(--accent-blue)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub color: &'static str,
    pub shown_at_ms: u64,
    pub visible_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now_ms: u64, visible_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            icon: kind.icon(),
            color: kind.color(),
            shown_at_ms: now_ms,
            visible_ms,
        }
    }

    /// Phase at `now_ms`, or `None` once the toast should be gone
    pub fn phase_at(&self, now_ms: u64) -> Option<NotificationPhase> {
        let age = now_ms.saturating_sub(self.shown_at_ms);
        if age < ENTER_DELAY_MS {
            Some(NotificationPhase::Entering)
        } else if age < self.visible_ms {
            Some(NotificationPhase::Visible)
        } else if age < self.visible_ms + EXIT_MS {
            Some(NotificationPhase::Leaving)
        } else {
            None
        }
    }
}

/// Owner of every live toast
#[derive(Debug, Clone)]
pub struct NotificationTray {
    items: Vec<Notification>,
    visible_ms: u64,
}

impl NotificationTray {
    pub fn new(visible_ms: u64) -> Self {
        Self {
            items: Vec::new(),
            visible_ms,
        }
    }

    /// Show a new toast and return it
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: u64) -> &Notification {
        self.items.push(Notification::new(message, kind, now_ms, self.visible_ms));
        &self.items[self.items.len() - 1]
    }

    /// Drop every toast whose lifecycle has ended; returns their ids
    pub fn tick(&mut self, now_ms: u64) -> Vec<String> {
        let mut disposed = Vec::new();
        self.items.retain(|n| {
            let alive = n.phase_at(now_ms).is_some();
            if !alive {
                disposed.push(n.id.clone());
            }
            alive
        });
        disposed
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}
