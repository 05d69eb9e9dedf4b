//! Orders API client
//!
//! A single unauthenticated GET against the configured endpoint.
//! No retries, no timeout, no request deduplication.

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::Order;

/// Longest slice of an unexpected body kept for logs
const BODY_PREVIEW_CHARS: usize = 200;

/// Orders API client
pub struct OrdersClient {
    endpoint: String,
    http: reqwest::Client,
}

impl OrdersClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.orders_endpoint.clone())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch every order the API returns
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let body = Self::handle_response(response).await?;
        parse_orders(&body)
    }

    /// Check the status and hand back the raw body
    async fn handle_response(response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(DashboardError::Upstream {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        response.text().await.map_err(DashboardError::from)
    }
}

/// Parse a response body. Anything other than a JSON array is rejected
/// as an unexpected shape rather than a parse failure.
pub fn parse_orders(body: &str) -> Result<Vec<Order>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(DashboardError::UnexpectedShape(preview(&value.to_string())));
    }
    Ok(serde_json::from_value(value)?)
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let body = r#"[
            {"_id": "a1", "email": "r@x.in", "finalAmount": 120, "status": "Pending",
             "orderDate": "2024-04-02T10:00:00Z", "items": [{"name": "Jade", "quantity": 1, "price": 120}]},
            {"_id": "a2", "status": "Delivered"}
        ]"#;
        let orders = parse_orders(body).expect("array should parse");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].amount(), 120.0);
        assert_eq!(orders[1].customer(), "Guest");
    }

    #[test]
    fn test_null_item_name_keeps_the_batch() {
        let body = r#"[
            {"_id": "a1", "finalAmount": 50, "items": [{"name": null, "quantity": 1, "price": 50}]},
            {"_id": "a2", "finalAmount": 80, "items": [{"name": "Tulsi", "quantity": 2, "price": 40}]}
        ]"#;
        let orders = parse_orders(body).expect("null item name should not fail the batch");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].line_items()[0].name, "");
        assert_eq!(orders[1].line_items()[0].name, "Tulsi");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_orders("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_unexpected_shape() {
        let err = parse_orders(r#"{"message": "Service unavailable"}"#).unwrap_err();
        assert!(matches!(err, DashboardError::UnexpectedShape(_)));

        let err = parse_orders("null").unwrap_err();
        assert!(matches!(err, DashboardError::UnexpectedShape(_)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_orders("<html>502</html>").unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "₹".repeat(300);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), BODY_PREVIEW_CHARS + 1);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = OrdersClient::new(&Config::default());
        assert_eq!(client.endpoint, "https://new-plant-1.onrender.com/orders");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = OrdersClient::with_endpoint("http://127.0.0.1:9/orders");
        let err = client.fetch_orders().await.unwrap_err();
        assert!(matches!(err, DashboardError::Http(_)));
    }
}
