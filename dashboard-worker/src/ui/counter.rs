//! Stat-card counter animation plans

use serde::Serialize;

use crate::aggregate::DashboardMetrics;
use crate::render::group_thousands;

/// One animation frame at ~60fps
pub const FRAME_MS: u64 = 16;
/// Counters start this long after the loading screen goes away
pub const START_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Revenue,
    Orders,
    Customers,
    Products,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [StatKind::Revenue, StatKind::Orders, StatKind::Customers, StatKind::Products];

    /// Value shown before the first fetch completes
    pub fn placeholder_target(self) -> u64 {
        match self {
            StatKind::Revenue => 45_280,
            StatKind::Orders => 1_247,
            StatKind::Customers => 892,
            StatKind::Products => 2_156,
        }
    }

    /// Value of the card's `data-stat` attribute
    pub fn key(self) -> &'static str {
        match self {
            StatKind::Revenue => "revenue",
            StatKind::Orders => "orders",
            StatKind::Customers => "customers",
            StatKind::Products => "products",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Revenue => "Total Revenue",
            StatKind::Orders => "Total Orders",
            StatKind::Customers => "Customers",
            StatKind::Products => "Products",
        }
    }
}

/// Count-up from zero to `target` over a fixed duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterAnimation {
    pub stat: StatKind,
    pub target: u64,
    pub increment: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub final_text: String,
}

impl CounterAnimation {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(stat: StatKind, target: u64, duration_ms: u64, currency: Option<&str>) -> Self {
        let frames = duration_ms as f64 / FRAME_MS as f64;
        let mut counter = Self {
            stat,
            target,
            increment: target as f64 / frames,
            currency: currency.map(String::from),
            final_text: String::new(),
        };
        counter.final_text = counter.format(target);
        counter
    }

    /// Display text for a counter value
    pub fn format(&self, value: u64) -> String {
        match &self.currency {
            Some(symbol) => format!("{symbol}{}", group_thousands(value)),
            None => group_thousands(value),
        }
    }

    /// Text of every frame in order. A zero target leaves the card untouched.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        let target = self.target as f64;
        let mut current = 0.0_f64;
        std::iter::from_fn(move || {
            if current >= target || self.increment <= 0.0 {
                return None;
            }
            current = (current + self.increment).min(target);
            Some(self.format(current.floor() as u64))
        })
    }
}

/// Counters for the four stat cards. Revenue is floored to whole units.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn counters_for(metrics: &DashboardMetrics, duration_ms: u64, currency: &str) -> Vec<CounterAnimation> {
    vec![
        CounterAnimation::new(
            StatKind::Revenue,
            metrics.total_revenue.max(0.0).floor() as u64,
            duration_ms,
            Some(currency),
        ),
        CounterAnimation::new(StatKind::Orders, metrics.total_orders as u64, duration_ms, None),
        CounterAnimation::new(StatKind::Customers, metrics.customers as u64, duration_ms, None),
        CounterAnimation::new(StatKind::Products, metrics.products as u64, duration_ms, None),
    ]
}

/// Counters seeded with the placeholder targets
pub fn placeholder_counters(duration_ms: u64, currency: &str) -> Vec<CounterAnimation> {
    StatKind::ALL
        .into_iter()
        .map(|stat| {
            let currency = (stat == StatKind::Revenue).then_some(currency);
            CounterAnimation::new(stat, stat.placeholder_target(), duration_ms, currency)
        })
        .collect()
}
