//! Monthly sales line chart
//!
//! Serializes straight into a Chart.js config object.

use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesChart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 12],
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: [f64; 12],
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

impl SalesChart {
    pub fn from_monthly(months: [f64; 12]) -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: MONTH_LABELS,
                datasets: vec![Dataset {
                    label: "Sales",
                    data: months,
                    border_color: "#fb641b",
                    background_color: "rgba(251, 100, 27, 0.2)",
                    fill: true,
                }],
            },
            options: ChartOptions {
                responsive: true,
                scales: Scales {
                    y: Axis { begin_at_zero: true },
                },
            },
        }
    }

    pub fn series(&self) -> &[f64] {
        self.data.datasets.first().map(|d| &d.data[..]).unwrap_or(&[])
    }
}
