//! Order aggregation
//!
//! Derived summary statistics recomputed from the full order set on
//! every refresh. Everything here is pure and order-preserving.

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use serde::Serialize;

use crate::types::Order;

/// Headline numbers for the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub customers: usize,
    pub products: usize,
}

impl DashboardMetrics {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total_revenue: total_revenue(orders),
            total_orders: orders.len(),
            customers: distinct_customers(orders),
            products: distinct_products(orders),
        }
    }
}

/// Units sold and revenue for one product name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub sales: f64,
    pub revenue: f64,
}

/// Sum of final amounts, missing amounts count as zero
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(Order::amount).sum()
}

/// Unique line-item names across all orders
pub fn distinct_products(orders: &[Order]) -> usize {
    orders
        .iter()
        .flat_map(Order::line_items)
        .map(|item| item.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Unique customer emails. Orders without an email share one bucket.
pub fn distinct_customers(orders: &[Order]) -> usize {
    orders
        .iter()
        .map(|order| order.email.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

/// Per-product totals in first-encounter order
pub fn product_summaries(orders: &[Order]) -> Vec<ProductSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ProductSummary> = Vec::new();

    for item in orders.iter().flat_map(Order::line_items) {
        let slot = *index.entry(item.name.as_str()).or_insert_with(|| {
            summaries.push(ProductSummary {
                name: item.name.clone(),
                sales: 0.0,
                revenue: 0.0,
            });
            summaries.len() - 1
        });
        summaries[slot].sales += item.units();
        summaries[slot].revenue += item.revenue();
    }

    summaries
}

/// Best sellers by units, ties keep encounter order
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSummary> {
    let mut summaries = product_summaries(orders);
    // sort_by is stable
    summaries.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    summaries.truncate(limit);
    summaries
}

/// Sales per calendar month (index 0 = January), bucketed in UTC.
/// Orders without a usable date are left out.
pub fn monthly_sales(orders: &[Order]) -> [f64; 12] {
    let mut months = [0.0; 12];
    for order in orders {
        if let Some(date) = order.ordered_at() {
            months[date.month0() as usize] += order.amount();
        }
    }
    months
}

/// Orders whose status is exactly "Pending"
pub fn pending_orders(orders: &[Order]) -> Vec<&Order> {
    orders.iter().filter(|order| order.is_pending()).collect()
}

/// Most recent orders as returned by the API (first `limit`)
pub fn recent_orders(orders: &[Order], limit: usize) -> &[Order] {
    &orders[..orders.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, OrderDate};

    fn item(name: &str, quantity: Option<f64>, price: Option<f64>) -> LineItem {
        LineItem {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn order(id: &str, email: Option<&str>, amount: Option<f64>, items: Vec<LineItem>) -> Order {
        Order {
            id: id.to_string(),
            email: email.map(String::from),
            final_amount: amount,
            status: Some("Delivered".to_string()),
            order_date: None,
            items: Some(items),
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(
                "o1",
                Some("a@x.com"),
                Some(500.0),
                vec![item("Fern", Some(2.0), Some(100.0)), item("Cactus", None, Some(50.0))],
            ),
            order("o2", None, None, vec![item("Cactus", Some(3.0), Some(50.0))]),
            order(
                "o3",
                Some("a@x.com"),
                Some(250.25),
                vec![item("Bonsai", Some(2.0), None), item("Orchid", Some(1.0), Some(700.0))],
            ),
            order("o4", None, Some(10.0), vec![]),
        ]
    }

    #[test]
    fn test_total_revenue_treats_missing_as_zero() {
        assert_eq!(total_revenue(&sample()), 760.25);
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_distinct_counts() {
        let orders = sample();
        assert_eq!(distinct_products(&orders), 4);
        // a@x.com plus the shared no-email bucket
        assert_eq!(distinct_customers(&orders), 2);

        let metrics = DashboardMetrics::from_orders(&orders);
        assert_eq!(metrics.total_orders, 4);
        assert_eq!(metrics.products, 4);
        assert_eq!(metrics.customers, 2);
    }

    #[test]
    fn test_product_summaries_group_by_name() {
        let summaries = product_summaries(&sample());
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Fern", "Cactus", "Bonsai", "Orchid"]);

        let cactus = &summaries[1];
        assert_eq!(cactus.sales, 4.0);
        assert_eq!(cactus.revenue, 200.0);

        let bonsai = &summaries[2];
        assert_eq!(bonsai.sales, 2.0);
        assert_eq!(bonsai.revenue, 0.0);
    }

    #[test]
    fn test_top_products_sorted_and_truncated() {
        let top = top_products(&sample(), 3);
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].sales >= w[1].sales));
        // Fern and Bonsai tie at 2 units; Fern was seen first
        let names: Vec<_> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Cactus", "Fern", "Bonsai"]);
    }

    #[test]
    fn test_identical_orders_sum_deterministically() {
        let twice = vec![sample()[0].clone(), sample()[0].clone()];
        let summaries = product_summaries(&twice);
        assert_eq!(summaries[0].sales, 4.0);
        assert_eq!(summaries[0].revenue, 400.0);
        assert_eq!(product_summaries(&twice), summaries);
    }

    #[test]
    fn test_monthly_sales_buckets_in_utc() {
        let mut jan = order("j", None, Some(100.0), vec![]);
        jan.order_date = Some(OrderDate::Text("2024-01-31T23:59:59Z".into()));
        let mut feb = order("f", None, Some(40.0), vec![]);
        // 01:00 on Feb 1st in UTC+05:30 is still January 31st in UTC
        feb.order_date = Some(OrderDate::Text("2024-02-01T01:00:00+05:30".into()));
        let mut dec = order("d", None, None, vec![]);
        dec.order_date = Some(OrderDate::Text("2023-12-15".into()));
        let undated = order("u", None, Some(999.0), vec![]);

        let months = monthly_sales(&[jan, feb, dec, undated]);
        assert_eq!(months[0], 140.0);
        assert_eq!(months[1], 0.0);
        assert_eq!(months[11], 0.0);
        assert_eq!(months.iter().sum::<f64>(), 140.0);
    }

    #[test]
    fn test_pending_filter_is_exact() {
        let mut orders = sample();
        orders[0].status = Some("Pending".into());
        orders[1].status = Some("pending".into());
        orders[2].status = None;

        let pending = pending_orders(&orders);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "o1");
    }

    #[test]
    fn test_recent_orders_caps_at_limit() {
        let orders = sample();
        assert_eq!(recent_orders(&orders, 3).len(), 3);
        assert_eq!(recent_orders(&orders[..1], 3).len(), 1);
        assert!(recent_orders(&[], 3).is_empty());
    }
}
