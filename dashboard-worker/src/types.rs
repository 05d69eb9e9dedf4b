//! Order data contracts
//!
//! Shapes returned by the upstream orders API. Every field is lenient:
//! a sparse or partially filled order still deserializes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status the "view pending" action filters on (exact, case-sensitive)
pub const PENDING_STATUS: &str = "Pending";

/// Shown in place of a missing customer email
pub const GUEST_CUSTOMER: &str = "Guest";

/// A customer purchase record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub final_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order_date: Option<OrderDate>,
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

impl Order {
    /// Final amount, missing counts as zero
    pub fn amount(&self) -> f64 {
        self.final_amount.unwrap_or(0.0)
    }

    /// Customer label for display
    pub fn customer(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => GUEST_CUSTOMER,
        }
    }

    /// Line items, missing counts as none
    pub fn line_items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Status text for display; an order without a status reads as pending
    pub fn display_status(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => PENDING_STATUS,
        }
    }

    /// CSS modifier for the status badge
    pub fn status_class(&self) -> String {
        self.display_status().to_lowercase()
    }

    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some(PENDING_STATUS)
    }

    /// Order date in UTC, if present and parseable
    pub fn ordered_at(&self) -> Option<DateTime<Utc>> {
        self.order_date.as_ref().and_then(OrderDate::to_utc)
    }
}

/// A single product entry within an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl LineItem {
    /// Units in this line; missing or zero counts as one
    #[allow(clippy::float_cmp)]
    pub fn units(&self) -> f64 {
        match self.quantity {
            Some(q) if q != 0.0 && !q.is_nan() => q,
            _ => 1.0,
        }
    }

    /// Unit price, missing counts as zero
    pub fn unit_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn revenue(&self) -> f64 {
        self.unit_price() * self.units()
    }
}

/// Order date as sent by the API: a date string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderDate {
    Millis(f64),
    Text(String),
}

impl OrderDate {
    /// Interpret the date in UTC. Strings without an offset are taken as UTC.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            OrderDate::Millis(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
            OrderDate::Millis(_) => None,
            OrderDate::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Strings that may arrive as numbers or null; null reads as empty
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}
