//! Page controller
//!
//! The dashboard page as an explicit view-state machine. Hosts feed it
//! [`UiEvent`]s (and fetch results) and perform the [`Effect`]s it returns.
//! Nothing here touches the DOM, the network or the console directly.
//!
//! The worker drives the fetch results (`orders_loaded`, `pending_loaded`).
//! Browser events are handled by the page script, which reads every message,
//! timing and table from [`manifest::UiManifest`]; `handle` is the model
//! those manifest values are checked against.
//!
//! # Architecture
//! - `notification.rs`: toast lifecycle, owned by a tray
//! - `menu.rs`: quick-action menu lifecycle
//! - `counter.rs`: stat-card count-up plans
//! - `chart.rs`: monthly sales chart config
//! - `shortcut.rs`: keyboard bindings
//! - `particles.rs`: hover particles
//! - `manifest.rs`: the above, serialized for the browser script

pub mod chart;
pub mod counter;
pub mod manifest;
pub mod menu;
pub mod notification;
pub mod particles;
pub mod shortcut;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::aggregate::{self, DashboardMetrics};
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::render;
use crate::types::Order;

use chart::SalesChart;
use counter::CounterAnimation;
use menu::{QuickAction, QuickActionMenu};
use notification::{Notification, NotificationKind, NotificationTray};
use particles::{CardRect, ParticleBurst};
use shortcut::Command;

/// Content area fade on navigation
pub const CONTENT_FADE_MS: u64 = 200;
/// Content opacity while the fade is in progress
pub const CONTENT_FADE_OPACITY: f64 = 0.5;
/// Action card press feedback
pub const CARD_PRESS_MS: u64 = 150;
/// Page fade before the logout redirect
pub const LOGOUT_FADE_MS: u64 = 500;

pub const PRODUCTS_ERROR: &str = "Error loading products";

pub const NOTIFICATIONS_MESSAGE: &str = "You have 3 new notifications!";
pub const LOGOUT_CONFIRM: &str = "Are you sure you want to logout?";

// Templates take one `{key}` placeholder, see [`fill`]
pub const CLICKED_TEMPLATE: &str = "{label} clicked!";
pub const VIEW_ORDER_TEMPLATE: &str = "Viewing order {id}";
pub const VIEW_PRODUCT_TEMPLATE: &str = "Viewing {name}";
pub const PENDING_SHOWN_TEMPLATE: &str = "Showing {count} pending order(s)";
pub const SEARCH_TEMPLATE: &str = "Searching for: {term}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    UltraDark,
}

impl Theme {
    /// Class on `<body>`, if any
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            Theme::UltraDark => Some("ultra-dark"),
        }
    }

    /// Toggle button icon
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Default => "fa-moon",
            Theme::UltraDark => "fa-sun",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Default => Theme::UltraDark,
            Theme::UltraDark => Theme::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SidebarState {
    pub collapsed: bool,
    /// Slide-over state on mobile viewports
    pub open: bool,
}

/// Where a document click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub in_sidebar: bool,
    pub in_sidebar_toggle: bool,
    pub in_menu: bool,
    pub in_fab: bool,
}

/// Everything the page shows
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub loading: LoadingPhase,
    pub sidebar: SidebarState,
    pub viewport_width: u32,
    pub active_page: String,
    pub page_title: String,
    pub theme: Theme,
    pub search_term: String,
    pub search_highlighted: bool,
    pub orders_html: String,
    pub products_html: String,
    pub stats: Vec<CounterAnimation>,
    pub chart: Option<SalesChart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    LoadingElapsed,
    /// The post-loading counter delay has run out
    CountersDue,
    Resize(u32),
    SidebarToggle,
    DocumentClick(ClickTarget),
    MenuSelect(String),
    Search(String),
    NotificationButton,
    ThemeToggle,
    Fab,
    QuickAction(QuickAction),
    ActionCard(String),
    OrderClicked(String),
    ProductClicked(String),
    ViewPendingOrders,
    Key { ctrl: bool, key: String },
    LogoutConfirmed,
    LogoutCancelled,
    StatCardHover(CardRect),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Work for the host to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    HideLoadingScreen,
    InitAnimations,
    FetchOrders,
    FetchPendingOrders,
    /// Deliver [`UiEvent::CountersDue`] after this long
    ScheduleCounters { after_ms: u64 },
    AnimateCounters { delay_ms: u64, counters: Vec<CounterAnimation> },
    RenderChart { chart: SalesChart },
    FadeContent { opacity: f64, restore_after_ms: u64 },
    FocusSearch,
    PressCard { label: String, release_after_ms: u64 },
    SpawnParticles { burst: ParticleBurst },
    Notify { notification: Notification },
    DisposeNotification { id: String },
    OpenMenu,
    CloseMenu { after_ms: u64 },
    RemoveMenu,
    FadeOutPage,
    Navigate { url: String, after_ms: u64 },
    Log { level: LogLevel, message: String },
}

/// Payload for `/api/dashboard`
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub orders_html: String,
    pub products_html: String,
    pub stats: Vec<CounterAnimation>,
    pub chart: Option<SalesChart>,
    pub notification: Option<Notification>,
}

/// Payload for `/api/orders/pending`
#[derive(Debug, Clone, Serialize)]
pub struct PendingView {
    pub orders_html: String,
    pub count: usize,
    pub notification: Option<Notification>,
}

pub struct PageController {
    currency: String,
    counter_duration_ms: u64,
    recent_limit: usize,
    top_limit: usize,
    mobile_breakpoint_px: u32,
    logout_redirect: String,
    view: ViewState,
    tray: NotificationTray,
    menu: Option<QuickActionMenu>,
    /// Stats come from fetched orders rather than placeholders
    stats_live: bool,
    pending_count: usize,
    rng: StdRng,
}

impl PageController {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            currency: config.currency_symbol.clone(),
            counter_duration_ms: config.counter_duration_ms,
            recent_limit: config.recent_orders_limit,
            top_limit: config.top_products_limit,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
            logout_redirect: config.logout_redirect.clone(),
            view: ViewState {
                loading: LoadingPhase::Loading,
                sidebar: SidebarState::default(),
                viewport_width: 1280,
                active_page: "dashboard".to_string(),
                page_title: "Dashboard".to_string(),
                theme: Theme::Default,
                search_term: String::new(),
                search_highlighted: false,
                orders_html: String::new(),
                products_html: String::new(),
                stats: counter::placeholder_counters(config.counter_duration_ms, &config.currency_symbol),
                chart: None,
            },
            tray: NotificationTray::new(config.notification_duration_ms),
            menu: None,
            stats_live: false,
            pending_count: 0,
            rng,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn notifications(&self) -> &[Notification] {
        self.tray.active()
    }

    pub fn menu(&self) -> Option<&QuickActionMenu> {
        self.menu.as_ref()
    }

    fn is_mobile(&self) -> bool {
        self.view.viewport_width <= self.mobile_breakpoint_px
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: u64) -> Effect {
        let notification = self.tray.push(message, kind, now_ms).clone();
        Effect::Notify { notification }
    }

    /// Apply one UI event
    pub fn handle(&mut self, event: UiEvent, now_ms: u64) -> Vec<Effect> {
        match event {
            UiEvent::LoadingElapsed => {
                if self.view.loading == LoadingPhase::Ready {
                    return vec![];
                }
                self.view.loading = LoadingPhase::Ready;
                vec![
                    Effect::HideLoadingScreen,
                    Effect::InitAnimations,
                    Effect::FetchOrders,
                    Effect::ScheduleCounters {
                        after_ms: counter::START_DELAY_MS,
                    },
                ]
            }
            // Live stats were already animated when they arrived
            UiEvent::CountersDue if self.stats_live => vec![],
            UiEvent::CountersDue => vec![Effect::AnimateCounters {
                delay_ms: 0,
                counters: self.view.stats.clone(),
            }],
            UiEvent::Resize(width) => {
                self.view.viewport_width = width;
                vec![]
            }
            UiEvent::SidebarToggle => {
                self.view.sidebar.collapsed = !self.view.sidebar.collapsed;
                if self.is_mobile() {
                    self.view.sidebar.open = !self.view.sidebar.open;
                }
                vec![]
            }
            UiEvent::DocumentClick(target) => self.document_click(target, now_ms),
            UiEvent::MenuSelect(page) => {
                self.view.page_title = capitalize(&page);
                self.view.active_page = page;
                vec![Effect::FadeContent {
                    opacity: CONTENT_FADE_OPACITY,
                    restore_after_ms: CONTENT_FADE_MS,
                }]
            }
            UiEvent::Search(text) => {
                self.view.search_term = text.to_lowercase();
                self.view.search_highlighted = !self.view.search_term.is_empty();
                vec![Effect::Log {
                    level: LogLevel::Info,
                    message: fill(SEARCH_TEMPLATE, "term", &self.view.search_term),
                }]
            }
            UiEvent::NotificationButton => {
                vec![self.notify(NOTIFICATIONS_MESSAGE, NotificationKind::Info, now_ms)]
            }
            UiEvent::ThemeToggle => {
                self.view.theme = self.view.theme.toggled();
                vec![]
            }
            UiEvent::Fab => {
                if self.menu.as_ref().is_some_and(|m| !m.is_closing()) {
                    return vec![];
                }
                self.menu = Some(QuickActionMenu::open(now_ms));
                vec![Effect::OpenMenu]
            }
            UiEvent::QuickAction(action) => {
                if self.menu.take().is_none() {
                    return vec![];
                }
                vec![
                    self.notify(fill(CLICKED_TEMPLATE, "label", action.label()), NotificationKind::Success, now_ms),
                    Effect::RemoveMenu,
                ]
            }
            UiEvent::ActionCard(label) => vec![
                self.notify(fill(CLICKED_TEMPLATE, "label", &label), NotificationKind::Success, now_ms),
                Effect::PressCard {
                    label,
                    release_after_ms: CARD_PRESS_MS,
                },
            ],
            UiEvent::OrderClicked(id) => {
                vec![self.notify(fill(VIEW_ORDER_TEMPLATE, "id", &id), NotificationKind::Info, now_ms)]
            }
            UiEvent::ProductClicked(name) => {
                vec![self.notify(fill(VIEW_PRODUCT_TEMPLATE, "name", &name), NotificationKind::Info, now_ms)]
            }
            UiEvent::ViewPendingOrders => vec![Effect::FetchPendingOrders],
            UiEvent::Key { ctrl, key } => match shortcut::resolve(ctrl, &key) {
                Some(Command::FocusSearch) => vec![Effect::FocusSearch],
                Some(Command::ToggleSidebar) => {
                    self.view.sidebar.collapsed = !self.view.sidebar.collapsed;
                    vec![]
                }
                Some(Command::CloseMenu) => match self.menu.take() {
                    Some(_) => vec![Effect::RemoveMenu],
                    None => vec![],
                },
                None => vec![],
            },
            UiEvent::LogoutConfirmed => vec![
                Effect::FadeOutPage,
                Effect::Navigate {
                    url: self.logout_redirect.clone(),
                    after_ms: LOGOUT_FADE_MS,
                },
            ],
            UiEvent::LogoutCancelled => vec![],
            UiEvent::StatCardHover(rect) => vec![Effect::SpawnParticles {
                burst: ParticleBurst::spawn(rect, &mut self.rng),
            }],
            UiEvent::Tick => self.tick(now_ms),
        }
    }

    fn document_click(&mut self, target: ClickTarget, now_ms: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_mobile() && !target.in_sidebar && !target.in_sidebar_toggle {
            self.view.sidebar.open = false;
        }
        if let Some(open_menu) = self.menu.as_mut() {
            if open_menu.accepts_outside_click(now_ms) && !target.in_menu && !target.in_fab {
                open_menu.begin_close(now_ms);
                effects.push(Effect::CloseMenu {
                    after_ms: menu::CLOSE_MS,
                });
            }
        }
        effects
    }

    fn tick(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .tray
            .tick(now_ms)
            .into_iter()
            .map(|id| Effect::DisposeNotification { id })
            .collect();
        if self.menu.as_ref().is_some_and(|m| m.phase_at(now_ms).is_none()) {
            self.menu = None;
            effects.push(Effect::RemoveMenu);
        }
        effects
    }

    /// Apply the result of the main orders fetch
    pub fn orders_loaded(&mut self, result: Result<Vec<Order>>, now_ms: u64) -> Vec<Effect> {
        match result {
            Ok(orders) => self.show_orders(&orders),
            Err(DashboardError::UnexpectedShape(body)) => {
                self.view.orders_html = render::message(render::NO_ORDERS);
                self.view.products_html = render::message(render::NO_PRODUCTS);
                vec![
                    Effect::Log {
                        level: LogLevel::Error,
                        message: format!("Expected an array of orders, got: {body}"),
                    },
                    self.notify(render::NO_ORDERS, NotificationKind::Warning, now_ms),
                ]
            }
            Err(err) => {
                self.view.orders_html = render::message(render::ORDERS_ERROR);
                self.view.products_html = render::message(PRODUCTS_ERROR);
                vec![
                    Effect::Log {
                        level: LogLevel::Error,
                        message: format!("Error fetching orders: {err}"),
                    },
                    self.notify(render::ORDERS_ERROR, NotificationKind::Error, now_ms),
                ]
            }
        }
    }

    fn show_orders(&mut self, orders: &[Order]) -> Vec<Effect> {
        let recent = aggregate::recent_orders(orders, self.recent_limit);
        self.view.orders_html = render::order_list(recent, &self.currency, render::NO_ORDERS);

        let metrics = DashboardMetrics::from_orders(orders);
        self.view.stats = counter::counters_for(&metrics, self.counter_duration_ms, &self.currency);
        self.stats_live = true;

        let top = aggregate::top_products(orders, self.top_limit);
        self.view.products_html = render::product_list(&top, &self.currency);

        let chart = SalesChart::from_monthly(aggregate::monthly_sales(orders));
        self.view.chart = Some(chart.clone());

        vec![
            Effect::RenderChart { chart },
            Effect::AnimateCounters {
                delay_ms: 0,
                counters: self.view.stats.clone(),
            },
        ]
    }

    /// Apply the result of a "view all pending" fetch.
    /// Overlapping requests are not deduplicated; the last one applied wins.
    pub fn pending_loaded(&mut self, result: Result<Vec<Order>>, now_ms: u64) -> Vec<Effect> {
        match result {
            Ok(orders) => {
                let pending = aggregate::pending_orders(&orders);
                let count = pending.len();
                self.pending_count = count;
                self.view.orders_html = render::order_list(pending, &self.currency, render::NO_PENDING_ORDERS);
                vec![self.notify(
                    fill(PENDING_SHOWN_TEMPLATE, "count", &count.to_string()),
                    NotificationKind::Info,
                    now_ms,
                )]
            }
            Err(err) => {
                self.pending_count = 0;
                self.view.orders_html = render::message(render::PENDING_ERROR);
                vec![
                    Effect::Log {
                        level: LogLevel::Error,
                        message: format!("Error fetching pending orders: {err}"),
                    },
                    self.notify(render::PENDING_ERROR, NotificationKind::Error, now_ms),
                ]
            }
        }
    }

    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView {
            orders_html: self.view.orders_html.clone(),
            products_html: self.view.products_html.clone(),
            stats: self.view.stats.clone(),
            chart: self.view.chart.clone(),
            notification: self.tray.latest().cloned(),
        }
    }

    pub fn pending_view(&self) -> PendingView {
        PendingView {
            orders_html: self.view.orders_html.clone(),
            count: self.pending_count,
            notification: self.tray.latest().cloned(),
        }
    }
}

/// Substitute `{key}` in a message template
pub fn fill(template: &str, key: &str, value: &str) -> String {
    template.replace(&format!("{{{key}}}"), value)
}

/// First character uppercased, the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    fn controller() -> PageController {
        PageController::with_rng(&Config::default(), StdRng::seed_from_u64(42))
    }

    fn orders() -> Vec<Order> {
        let mk = |id: &str, status: &str, amount: f64, item: &str, qty: f64| Order {
            id: id.to_string(),
            email: Some(format!("{id}@shop.in")),
            final_amount: Some(amount),
            status: Some(status.to_string()),
            order_date: Some(crate::types::OrderDate::Text("2024-05-10T12:00:00Z".into())),
            items: Some(vec![LineItem {
                name: item.to_string(),
                quantity: Some(qty),
                price: Some(100.0),
            }]),
        };
        vec![
            mk("o1", "Pending", 300.0, "Fern", 3.0),
            mk("o2", "Delivered", 100.0, "Cactus", 1.0),
            mk("o3", "Pending", 500.0, "Bonsai", 5.0),
            mk("o4", "Shipped", 200.0, "Orchid", 2.0),
        ]
    }

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify { notification } => Some(notification),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_loading_elapsed_fetches_once() {
        let mut c = controller();
        let effects = c.handle(UiEvent::LoadingElapsed, 2_500);
        assert!(effects.contains(&Effect::FetchOrders));
        assert!(effects.contains(&Effect::HideLoadingScreen));
        assert!(effects.contains(&Effect::ScheduleCounters { after_ms: 1_000 }));
        assert_eq!(c.view().loading, LoadingPhase::Ready);
        assert!(c.handle(UiEvent::LoadingElapsed, 2_600).is_empty());
    }

    #[test]
    fn test_delayed_counters_use_placeholders_until_orders_arrive() {
        let mut c = controller();
        c.handle(UiEvent::LoadingElapsed, 0);
        match c.handle(UiEvent::CountersDue, 1_000).as_slice() {
            [Effect::AnimateCounters { counters, .. }] => assert_eq!(counters[0].final_text, "₹45,280"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_delayed_counters_never_replace_live_stats() {
        let mut c = controller();
        c.handle(UiEvent::LoadingElapsed, 0);
        // Orders resolve before the counter delay runs out
        let effects = c.orders_loaded(Ok(orders()), 300);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::AnimateCounters { counters, .. } if counters[0].final_text == "₹1,100"
        )));

        assert!(c.handle(UiEvent::CountersDue, 1_000).is_empty());
        assert_eq!(c.view().stats[0].target, 1_100);
    }

    #[test]
    fn test_orders_loaded_populates_view() {
        let mut c = controller();
        let effects = c.orders_loaded(Ok(orders()), 0);

        let view = c.view();
        assert_eq!(view.orders_html.matches("order-item").count(), 3);
        assert!(!view.orders_html.contains("o4"));
        assert_eq!(view.products_html.matches("product-item").count(), 3);
        assert!(view.products_html.find("Bonsai") < view.products_html.find("Fern"));
        assert_eq!(view.stats[0].final_text, "₹1,100");
        assert_eq!(view.stats[1].target, 4);
        assert_eq!(view.chart.as_ref().map(|c| c.series()[4]), Some(1100.0));
        assert!(effects.iter().any(|e| matches!(e, Effect::RenderChart { .. })));
        assert!(notifications(&effects).is_empty());
    }

    #[test]
    fn test_empty_orders_render_messages() {
        let mut c = controller();
        c.orders_loaded(Ok(vec![]), 0);
        assert_eq!(c.view().orders_html, "<p>No orders found</p>");
        assert_eq!(c.view().products_html, "<p>No products found</p>");

        c.pending_loaded(Ok(vec![]), 0);
        assert_eq!(c.view().orders_html, "<p>No pending orders</p>");
    }

    #[test]
    fn test_fetch_failure_falls_back_with_error_toast() {
        let mut c = controller();
        let effects = c.orders_loaded(Err(DashboardError::Http("connection refused".into())), 10);

        assert_eq!(c.view().orders_html, "<p>Error loading orders</p>");
        let toasts = notifications(&effects);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert_eq!(toasts[0].message, "Error loading orders");
        assert!(effects.iter().any(|e| matches!(e, Effect::Log { level: LogLevel::Error, .. })));
    }

    #[test]
    fn test_non_array_response_warns() {
        let mut c = controller();
        let effects = c.orders_loaded(Err(DashboardError::UnexpectedShape("{}".into())), 0);
        assert_eq!(c.view().orders_html, "<p>No orders found</p>");
        assert_eq!(notifications(&effects)[0].kind, NotificationKind::Warning);
    }

    #[test]
    fn test_pending_orders_flow() {
        let mut c = controller();
        assert_eq!(c.handle(UiEvent::ViewPendingOrders, 0), vec![Effect::FetchPendingOrders]);

        let effects = c.pending_loaded(Ok(orders()), 0);
        assert_eq!(c.view().orders_html.matches("order-item").count(), 2);
        assert_eq!(c.pending_view().count, 2);
        assert_eq!(notifications(&effects)[0].message, "Showing 2 pending order(s)");

        let effects = c.pending_loaded(Err(DashboardError::Http("timeout".into())), 0);
        assert_eq!(c.view().orders_html, "<p>Error loading pending orders</p>");
        assert_eq!(notifications(&effects)[0].kind, NotificationKind::Error);
        assert_eq!(c.pending_view().notification.map(|n| n.kind), Some(NotificationKind::Error));
    }

    #[test]
    fn test_sidebar_toggle_desktop_and_mobile() {
        let mut c = controller();
        c.handle(UiEvent::SidebarToggle, 0);
        assert_eq!(c.view().sidebar, SidebarState { collapsed: true, open: false });

        c.handle(UiEvent::Resize(600), 0);
        c.handle(UiEvent::SidebarToggle, 0);
        assert_eq!(c.view().sidebar, SidebarState { collapsed: false, open: true });

        c.handle(UiEvent::DocumentClick(ClickTarget::default()), 0);
        assert!(!c.view().sidebar.open);
    }

    #[test]
    fn test_navigation_sets_title() {
        let mut c = controller();
        let effects = c.handle(UiEvent::MenuSelect("analytics".into()), 0);
        assert_eq!(c.view().page_title, "Analytics");
        assert_eq!(c.view().active_page, "analytics");
        assert_eq!(
            effects,
            vec![Effect::FadeContent {
                opacity: 0.5,
                restore_after_ms: 200
            }]
        );
    }

    #[test]
    fn test_search_and_theme() {
        let mut c = controller();
        c.handle(UiEvent::Search("FeRn".into()), 0);
        assert_eq!(c.view().search_term, "fern");
        assert!(c.view().search_highlighted);
        c.handle(UiEvent::Search(String::new()), 0);
        assert!(!c.view().search_highlighted);

        c.handle(UiEvent::ThemeToggle, 0);
        assert_eq!(c.view().theme.body_class(), Some("ultra-dark"));
        assert_eq!(c.view().theme.icon(), "fa-sun");
        c.handle(UiEvent::ThemeToggle, 0);
        assert_eq!(c.view().theme.icon(), "fa-moon");
    }

    #[test]
    fn test_quick_action_menu_lifecycle() {
        let mut c = controller();
        assert_eq!(c.handle(UiEvent::Fab, 0), vec![Effect::OpenMenu]);
        // Only one menu at a time
        assert!(c.handle(UiEvent::Fab, 50).is_empty());

        // Clicks right after opening are ignored
        let outside = ClickTarget::default();
        assert!(c.handle(UiEvent::DocumentClick(outside), 50).is_empty());
        assert_eq!(
            c.handle(UiEvent::DocumentClick(outside), 200),
            vec![Effect::CloseMenu { after_ms: 300 }]
        );
        assert!(c.handle(UiEvent::Tick, 400).is_empty());
        assert_eq!(c.handle(UiEvent::Tick, 500), vec![Effect::RemoveMenu]);
        assert!(c.menu().is_none());
    }

    #[test]
    fn test_quick_action_selection_notifies() {
        let mut c = controller();
        c.handle(UiEvent::Fab, 0);
        let effects = c.handle(UiEvent::QuickAction(QuickAction::AddCustomer), 150);
        assert_eq!(notifications(&effects)[0].message, "Add Customer clicked!");
        assert_eq!(notifications(&effects)[0].kind, NotificationKind::Success);
        assert!(effects.contains(&Effect::RemoveMenu));
        assert!(c.menu().is_none());
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut c = controller();
        let key = |ctrl: bool, k: &str| UiEvent::Key { ctrl, key: k.to_string() };

        assert_eq!(c.handle(key(true, "/"), 0), vec![Effect::FocusSearch]);
        c.handle(key(true, "b"), 0);
        assert!(c.view().sidebar.collapsed);

        c.handle(UiEvent::Fab, 0);
        assert_eq!(c.handle(key(false, "Escape"), 10), vec![Effect::RemoveMenu]);
        assert!(c.menu().is_none());
        assert!(c.handle(key(false, "Escape"), 20).is_empty());
    }

    #[test]
    fn test_click_notifications_and_tick() {
        let mut c = controller();
        c.handle(UiEvent::OrderClicked("o9".into()), 0);
        c.handle(UiEvent::ProductClicked("Fern".into()), 1_000);
        let messages: Vec<_> = c.notifications().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["Viewing order o9", "Viewing Fern"]);

        let effects = c.handle(UiEvent::Tick, 3_300);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::DisposeNotification { .. }));
        assert_eq!(c.notifications().len(), 1);
    }

    #[test]
    fn test_action_card_and_logout() {
        let mut c = controller();
        let effects = c.handle(UiEvent::ActionCard("Export Data".into()), 0);
        assert_eq!(notifications(&effects)[0].message, "Export Data clicked!");
        assert!(effects.contains(&Effect::PressCard {
            label: "Export Data".into(),
            release_after_ms: 150
        }));

        assert!(c.handle(UiEvent::LogoutCancelled, 0).is_empty());
        let effects = c.handle(UiEvent::LogoutConfirmed, 0);
        assert_eq!(
            effects,
            vec![
                Effect::FadeOutPage,
                Effect::Navigate {
                    url: "index.html".into(),
                    after_ms: 500
                }
            ]
        );
    }

    #[test]
    fn test_stat_card_hover_spawns_particles() {
        let mut c = controller();
        let rect = CardRect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        };
        match c.handle(UiEvent::StatCardHover(rect), 0).as_slice() {
            [Effect::SpawnParticles { burst }] => assert_eq!(burst.particles.len(), 5),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(fill(CLICKED_TEMPLATE, "label", "Export Data"), "Export Data clicked!");
        assert_eq!(fill(VIEW_ORDER_TEMPLATE, "id", "o1"), "Viewing order o1");
        assert_eq!(fill(VIEW_ORDER_TEMPLATE, "name", "o1"), VIEW_ORDER_TEMPLATE);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("orders"), "Orders");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
