//! Dashboard module - Orders admin web interface
//!
//! Provides the single-page admin dashboard.
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure rendered from the initial view state
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: DOM glue driven by the inlined UI manifest

mod css;
mod html;
mod js;

use crate::ui::ViewState;
use crate::ui::manifest::UiManifest;

/// Generate the complete dashboard HTML page
pub fn dashboard_html(view: &ViewState, manifest: &UiManifest) -> String {
    let body_class = view
        .theme
        .body_class()
        .map(|class| format!(r#" class="{class}""#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Admin Dashboard</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
{css}
    </style>
</head>
<body{body_class}>
{html}
    <script>
const UI = {ui};
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::body(view),
        ui = manifest.to_script_json(),
        js = js::SCRIPT
    )
}
