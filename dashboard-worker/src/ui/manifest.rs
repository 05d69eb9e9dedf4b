//! UI manifest
//!
//! Timings, tables, styles and message templates the browser script reads
//! at runtime. Every value comes from the constants [`PageController`]
//! itself uses, so the page behaves as the controller models it.
//!
//! [`PageController`]: super::PageController

use std::collections::BTreeMap;

use serde::Serialize;

use super::counter::{self, StatKind};
use super::menu::{self, QuickAction};
use super::notification::{self, NotificationKind};
use super::particles;
use super::shortcut::{SHORTCUTS, Shortcut};
use super::{
    CARD_PRESS_MS, CLICKED_TEMPLATE, CONTENT_FADE_MS, CONTENT_FADE_OPACITY, LOGOUT_CONFIRM, LOGOUT_FADE_MS,
    NOTIFICATIONS_MESSAGE, PRODUCTS_ERROR, SEARCH_TEMPLATE, Theme, VIEW_ORDER_TEMPLATE, VIEW_PRODUCT_TEMPLATE,
};
use crate::config::Config;
use crate::render;

#[derive(Debug, Clone, Serialize)]
pub struct UiManifest {
    pub endpoints: Endpoints,
    pub currency_symbol: String,
    pub loading_delay_ms: u64,
    pub mobile_breakpoint_px: u32,
    pub content_fade_ms: u64,
    pub content_fade_opacity: f64,
    pub card_press_ms: u64,
    pub theme: ThemeSettings,
    pub messages: Messages,
    pub counter: CounterSettings,
    pub notification: NotificationSettings,
    pub menu: MenuSettings,
    pub shortcuts: Vec<Shortcut>,
    pub particles: ParticleSettings,
    pub logout: LogoutSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub dashboard: &'static str,
    pub pending: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeSettings {
    pub dark_class: &'static str,
    pub light_icon: &'static str,
    pub dark_icon: &'static str,
}

/// Fixed messages and `{key}` templates, filled the same way as [`super::fill`]
#[derive(Debug, Clone, Serialize)]
pub struct Messages {
    pub notifications: &'static str,
    pub clicked: &'static str,
    pub viewing_order: &'static str,
    pub viewing_product: &'static str,
    pub search: &'static str,
    pub logout_confirm: &'static str,
    pub orders_error: &'static str,
    pub products_error: &'static str,
    pub pending_error: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterSettings {
    pub duration_ms: u64,
    pub frame_ms: u64,
    pub start_delay_ms: u64,
    pub stats: Vec<StatKind>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationSettings {
    pub enter_delay_ms: u64,
    pub visible_ms: u64,
    pub exit_ms: u64,
    pub kinds: BTreeMap<&'static str, KindStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KindStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSettings {
    pub open_delay_ms: u64,
    pub close_ms: u64,
    pub actions: Vec<ActionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSettings {
    pub count: usize,
    pub rise_px: f64,
    pub end_scale: f64,
    pub duration_ms: u64,
    pub size_px: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutSettings {
    pub redirect: String,
    pub fade_ms: u64,
}

impl UiManifest {
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoints: Endpoints {
                dashboard: "/api/dashboard",
                pending: "/api/orders/pending",
            },
            currency_symbol: config.currency_symbol.clone(),
            loading_delay_ms: config.loading_delay_ms,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
            content_fade_ms: CONTENT_FADE_MS,
            content_fade_opacity: CONTENT_FADE_OPACITY,
            card_press_ms: CARD_PRESS_MS,
            theme: ThemeSettings {
                dark_class: Theme::UltraDark.body_class().unwrap_or("ultra-dark"),
                light_icon: Theme::Default.icon(),
                dark_icon: Theme::UltraDark.icon(),
            },
            messages: Messages {
                notifications: NOTIFICATIONS_MESSAGE,
                clicked: CLICKED_TEMPLATE,
                viewing_order: VIEW_ORDER_TEMPLATE,
                viewing_product: VIEW_PRODUCT_TEMPLATE,
                search: SEARCH_TEMPLATE,
                logout_confirm: LOGOUT_CONFIRM,
                orders_error: render::ORDERS_ERROR,
                products_error: PRODUCTS_ERROR,
                pending_error: render::PENDING_ERROR,
            },
            counter: CounterSettings {
                duration_ms: config.counter_duration_ms,
                frame_ms: counter::FRAME_MS,
                start_delay_ms: counter::START_DELAY_MS,
                stats: StatKind::ALL.to_vec(),
            },
            notification: NotificationSettings {
                enter_delay_ms: notification::ENTER_DELAY_MS,
                visible_ms: config.notification_duration_ms,
                exit_ms: notification::EXIT_MS,
                kinds: NotificationKind::ALL
                    .into_iter()
                    .map(|k| {
                        (
                            k.name(),
                            KindStyle {
                                icon: k.icon(),
                                color: k.color(),
                            },
                        )
                    })
                    .collect(),
            },
            menu: MenuSettings {
                open_delay_ms: menu::OPEN_DELAY_MS,
                close_ms: menu::CLOSE_MS,
                actions: QuickAction::ALL
                    .into_iter()
                    .map(|a| ActionEntry {
                        id: a.id(),
                        label: a.label(),
                        icon: a.icon(),
                    })
                    .collect(),
            },
            shortcuts: SHORTCUTS.to_vec(),
            particles: ParticleSettings {
                count: particles::PARTICLES_PER_BURST,
                rise_px: particles::RISE_PX,
                end_scale: particles::END_SCALE,
                duration_ms: particles::DURATION_MS,
                size_px: particles::SIZE_PX,
                color: particles::COLOR,
            },
            logout: LogoutSettings {
                redirect: config.logout_redirect.clone(),
                fade_ms: LOGOUT_FADE_MS,
            },
        }
    }

    /// JSON safe to inline inside a `<script>` element
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }
}
