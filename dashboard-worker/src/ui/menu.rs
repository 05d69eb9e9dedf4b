//! Quick-action menu opened from the floating action button

use serde::Serialize;

/// Delay before the menu scales in (and starts listening for outside clicks)
pub const OPEN_DELAY_MS: u64 = 100;
/// Scale-out duration on an outside click
pub const CLOSE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    AddProduct,
    CreateOrder,
    AddCustomer,
    ViewReports,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddProduct,
        QuickAction::CreateOrder,
        QuickAction::AddCustomer,
        QuickAction::ViewReports,
    ];

    /// Value of the item's `data-action` attribute
    pub fn id(self) -> &'static str {
        match self {
            QuickAction::AddProduct => "add-product",
            QuickAction::CreateOrder => "create-order",
            QuickAction::AddCustomer => "add-customer",
            QuickAction::ViewReports => "view-reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::AddProduct => "Add Product",
            QuickAction::CreateOrder => "Create Order",
            QuickAction::AddCustomer => "Add Customer",
            QuickAction::ViewReports => "View Reports",
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix)
    pub fn icon(self) -> &'static str {
        match self {
            QuickAction::AddProduct => "plus",
            QuickAction::CreateOrder => "file-invoice",
            QuickAction::AddCustomer => "user-plus",
            QuickAction::ViewReports => "chart-line",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPhase {
    Opening,
    Open,
    Closing,
}

/// A single open menu instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionMenu {
    opened_at_ms: u64,
    closing_since_ms: Option<u64>,
}

impl QuickActionMenu {
    pub fn open(now_ms: u64) -> Self {
        Self {
            opened_at_ms: now_ms,
            closing_since_ms: None,
        }
    }

    /// Phase at `now_ms`, or `None` once the close animation has finished
    pub fn phase_at(&self, now_ms: u64) -> Option<MenuPhase> {
        match self.closing_since_ms {
            Some(since) if now_ms.saturating_sub(since) >= CLOSE_MS => None,
            Some(_) => Some(MenuPhase::Closing),
            None if now_ms.saturating_sub(self.opened_at_ms) < OPEN_DELAY_MS => Some(MenuPhase::Opening),
            None => Some(MenuPhase::Open),
        }
    }

    /// Outside clicks are ignored until the menu has finished opening
    pub fn accepts_outside_click(&self, now_ms: u64) -> bool {
        self.closing_since_ms.is_none() && now_ms.saturating_sub(self.opened_at_ms) >= OPEN_DELAY_MS
    }

    pub fn is_closing(&self) -> bool {
        self.closing_since_ms.is_some()
    }

    pub fn begin_close(&mut self, now_ms: u64) {
        if self.closing_since_ms.is_none() {
            self.closing_since_ms = Some(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_table() {
        assert_eq!(QuickAction::CreateOrder.id(), "create-order");
        assert_eq!(QuickAction::AddCustomer.label(), "Add Customer");
        assert_eq!(QuickAction::ViewReports.icon(), "chart-line");
        assert!(QuickAction::ALL.iter().all(|a| !a.icon().starts_with("fa-")));
    }

    #[test]
    fn test_menu_lifecycle() {
        let mut menu = QuickActionMenu::open(500);
        assert_eq!(menu.phase_at(550), Some(MenuPhase::Opening));
        assert!(!menu.accepts_outside_click(550));
        assert_eq!(menu.phase_at(600), Some(MenuPhase::Open));
        assert!(menu.accepts_outside_click(600));

        menu.begin_close(1_000);
        assert_eq!(menu.phase_at(1_200), Some(MenuPhase::Closing));
        assert!(!menu.accepts_outside_click(1_200));

        // A second close request does not restart the animation
        menu.begin_close(1_250);
        assert_eq!(menu.phase_at(1_300), None);
    }
}
