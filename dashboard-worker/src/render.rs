//! HTML fragments for the order and product lists
//!
//! The page swaps these into `.orders-list` and `.products-list`.
//! All interpolated text is escaped.

use std::fmt::Write;

use crate::aggregate::ProductSummary;
use crate::types::Order;

pub const NO_ORDERS: &str = "No orders found";
pub const NO_PENDING_ORDERS: &str = "No pending orders";
pub const NO_PRODUCTS: &str = "No products found";
pub const ORDERS_ERROR: &str = "Error loading orders";
pub const PENDING_ERROR: &str = "Error loading pending orders";

/// Money with two decimals, e.g. `₹1499.50`
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

/// Integer with `,` thousands separators, e.g. `45,280`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Paragraph used for empty and error states
pub fn message(text: &str) -> String {
    format!("<p>{}</p>", escape(text))
}

/// Order rows, or `empty` when there are none
pub fn order_list<'a, I>(orders: I, currency: &str, empty: &str) -> String
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut html = String::new();
    for order in orders {
        let _ = write!(
            html,
            r#"
<div class="order-item" data-order-id="{id}">
  <div class="order-info">
    <span class="order-id">{id}</span>
    <span class="customer-name">{customer}</span>
  </div>
  <div class="order-details">
    <span class="order-amount">{amount}</span>
    <span class="order-status {class}">{status}</span>
  </div>
</div>"#,
            id = escape(&order.id),
            customer = escape(order.customer()),
            amount = escape(&format_amount(currency, order.amount())),
            class = escape(&order.status_class()),
            status = escape(order.display_status()),
        );
    }
    if html.is_empty() { message(empty) } else { html }
}

/// Top product rows, or the "no products" message
pub fn product_list(products: &[ProductSummary], currency: &str) -> String {
    let mut html = String::new();
    for product in products {
        let _ = write!(
            html,
            r#"
<div class="product-item" data-product-name="{name}">
  <div class="product-info">
    <span class="product-name">{name}</span>
    <span class="product-sales">{sales} sold</span>
  </div>
  <div class="product-revenue">{revenue}</div>
</div>"#,
            name = escape(&product.name),
            sales = product.sales,
            revenue = escape(&format_amount(currency, product.revenue)),
        );
    }
    if html.is_empty() { message(NO_PRODUCTS) } else { html }
}

/// Minimal HTML text/attribute escaping
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
