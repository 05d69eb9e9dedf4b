//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Loading screen
//! - Sidebar navigation and header (search, notifications, theme, logout)
//! - Stat cards, sales chart, recent orders and top products
//! - Quick action cards and the floating action button

use std::fmt::Write;

use crate::render::escape;
use crate::ui::ViewState;

const MENU_PAGES: [(&str, &str); 6] = [
    ("dashboard", "fa-th-large"),
    ("orders", "fa-shopping-bag"),
    ("products", "fa-seedling"),
    ("customers", "fa-users"),
    ("analytics", "fa-chart-pie"),
    ("settings", "fa-cog"),
];

const ACTION_CARDS: [(&str, &str); 4] = [
    ("Add Product", "fa-plus-circle"),
    ("New Order", "fa-cart-plus"),
    ("Export Data", "fa-file-export"),
    ("Send Report", "fa-paper-plane"),
];

/// Page body for the given initial view state
pub fn body(view: &ViewState) -> String {
    let mut menu = String::new();
    for (page, icon) in MENU_PAGES {
        let active = if page == view.active_page { " active" } else { "" };
        let _ = write!(
            menu,
            r##"
                <li class="menu-item{active}">
                    <a href="#" class="menu-link" data-page="{page}"><i class="fas {icon}"></i><span>{label}</span></a>
                </li>"##,
            label = crate::ui::capitalize(page),
        );
    }

    let mut stats = String::new();
    for counter in &view.stats {
        let _ = write!(
            stats,
            r#"
                <div class="stat-card" data-animate>
                    <div class="stat-label">{label}</div>
                    <div class="stat-value" data-stat="{key}" data-target="{target}">0</div>
                </div>"#,
            label = counter.stat.label(),
            key = counter.stat.key(),
            target = counter.target,
        );
    }

    let mut actions = String::new();
    for (label, icon) in ACTION_CARDS {
        let _ = write!(
            actions,
            r#"
                    <div class="action-card"><i class="fas {icon}"></i><span>{label}</span></div>"#
        );
    }

    let sidebar_class = if view.sidebar.collapsed { " collapsed" } else { "" };

    format!(
        r#"
    <div class="loading-screen" id="loadingScreen">
        <div class="loader"></div>
        <p>Loading dashboard...</p>
    </div>

    <div class="dashboard" id="dashboard">
        <aside class="sidebar{sidebar_class}" id="sidebar">
            <div class="sidebar-header">
                <span class="logo">🌿 Admin</span>
                <button class="sidebar-toggle" id="sidebarToggle"><i class="fas fa-bars"></i></button>
            </div>
            <ul class="menu">{menu}
            </ul>
            <button class="logout-btn"><i class="fas fa-sign-out-alt"></i><span>Logout</span></button>
        </aside>

        <main class="main">
            <header class="topbar">
                <h1 class="page-title">{title}</h1>
                <div class="search-box">
                    <i class="fas fa-search"></i>
                    <input type="text" placeholder="Search... (Ctrl+/)">
                </div>
                <div class="topbar-actions">
                    <button class="notification-btn"><i class="fas fa-bell"></i><span class="badge">3</span></button>
                    <button class="theme-toggle"><i class="fas {theme_icon}"></i></button>
                </div>
            </header>

            <section class="content-area">
                <div class="stats-grid">{stats}
                </div>

                <div class="panel chart-panel" data-animate>
                    <div class="panel-header"><span class="panel-title">Sales Overview</span></div>
                    <canvas id="salesChart" height="110"></canvas>
                </div>

                <div class="panels">
                    <div class="panel" data-animate>
                        <div class="panel-header">
                            <span class="panel-title">Recent Orders</span>
                            <button class="btn" id="viewAllPendingBtn">View All Pending</button>
                        </div>
                        <div class="orders-list"><p>Loading orders...</p></div>
                    </div>
                    <div class="panel" data-animate>
                        <div class="panel-header"><span class="panel-title">Top Products</span></div>
                        <div class="products-list"><p>Loading products...</p></div>
                    </div>
                </div>

                <div class="panel" data-animate>
                    <div class="panel-header"><span class="panel-title">Quick Actions</span></div>
                    <div class="actions-grid">{actions}
                    </div>
                </div>
            </section>
        </main>
    </div>

    <button class="fab" id="fab"><i class="fas fa-plus"></i></button>
"#,
        title = escape(&view.page_title),
        theme_icon = view.theme.icon(),
    )
}
