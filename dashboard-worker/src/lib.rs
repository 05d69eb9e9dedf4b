//! Dashboard Worker - Orders admin dashboard on Cloudflare Workers
//!
//! Serves the admin dashboard page and the JSON endpoints behind it.
//!
//! # Architecture
//! - Main entry point routes HTTP requests
//! - `client`: upstream orders API
//! - `aggregate` + `render`: metrics, top products, monthly sales, list fragments
//! - `ui`: the page controller as an explicit view-state machine
//! - `dashboard`: HTML, CSS and the thin browser script
//!
//! # Features
//! - Recent orders, top products and stat counters from live order data
//! - Monthly sales chart (months bucketed in UTC)
//! - Pending-orders view
//! - Toasts, quick-action menu, theme toggle, keyboard shortcuts

#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns
#![allow(clippy::float_cmp)] // Exact sums in tests

mod aggregate;
mod client;
mod config;
mod dashboard;
mod error;
mod render;
mod types;
pub mod ui;

use worker::{Context, Env, Request, Response, Router, console_error, console_log, console_warn, event};

pub use aggregate::{DashboardMetrics, ProductSummary};
pub use client::{OrdersClient, parse_orders};
pub use config::Config;
pub use error::DashboardError;
pub use types::{LineItem, Order, OrderDate};
pub use ui::manifest::UiManifest;
pub use ui::{DashboardView, Effect, LogLevel, PageController, PendingView, UiEvent, ViewState};

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let router = Router::new();

    router
        // Health check
        .get("/health", |_req, ctx| {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": config.environment,
                "orders_endpoint": config.orders_endpoint,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        // Dashboard UI
        .get("/", |_req, ctx| render_page(&ctx.env))
        .get("/dashboard", |_req, ctx| render_page(&ctx.env))
        // UI manifest (also inlined in the page)
        .get("/api/ui", |_req, ctx| {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };
            Response::from_json(&UiManifest::from_config(&config))
        })
        // Recent orders, top products, counters and chart
        .get_async("/api/dashboard", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };
            let client = OrdersClient::new(&config);
            let mut controller = PageController::new(&config);

            let result = client.fetch_orders().await;
            let effects = controller.orders_loaded(result, now_ms());
            forward_logs(&effects);

            Response::from_json(&controller.dashboard_view())
        })
        // Orders with status exactly "Pending"
        .get_async("/api/orders/pending", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };
            let client = OrdersClient::new(&config);
            let mut controller = PageController::new(&config);

            let result = client.fetch_orders().await;
            let effects = controller.pending_loaded(result, now_ms());
            forward_logs(&effects);

            Response::from_json(&controller.pending_view())
        })
        // Fallback
        .run(req, env)
        .await
}

/// Dashboard page with the initial view state and manifest inlined
fn render_page(env: &Env) -> WResult<Response> {
    let config = match Config::from_env(env) {
        Ok(c) => c,
        Err(e) => return Response::error(format!("Config error: {e}"), 500),
    };
    let controller = PageController::new(&config);
    let manifest = UiManifest::from_config(&config);
    Response::from_html(dashboard::dashboard_html(controller.view(), &manifest))
}

/// Send controller log effects to the Workers console
fn forward_logs(effects: &[Effect]) {
    for effect in effects {
        if let Effect::Log { level, message } = effect {
            match level {
                LogLevel::Info => console_log!("{}", message),
                LogLevel::Warn => console_warn!("{}", message),
                LogLevel::Error => console_error!("{}", message),
            }
        }
    }
}

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
