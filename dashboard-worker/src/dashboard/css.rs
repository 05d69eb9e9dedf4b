//! Dashboard CSS styles
//!
//! Contains all styling for the admin dashboard UI.
//! Uses CSS custom properties (variables) for theming; the
//! `ultra-dark` body class swaps the background palette.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --primary-bg: #0f1115;
    --secondary-bg: #171a21;
    --card-bg: #1e222b;
    --hover-bg: #262b36;
    --border-color: #2e3440;
    --text-primary: #e6e9ef;
    --text-secondary: #9aa3b2;
    --accent-green: #10b981;
    --accent-red: #ef4444;
    --accent-orange: #fb641b;
    --accent-blue: #3b82f6;
    --shadow-medium: 0 8px 24px rgba(0, 0, 0, 0.35);
    --shadow-heavy: 0 16px 40px rgba(0, 0, 0, 0.5);
}

.ultra-dark {
    --primary-bg: #000000;
    --secondary-bg: #111111;
    --card-bg: #1a1a1a;
    --hover-bg: #2a2a2a;
    --border-color: #333333;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--primary-bg);
    color: var(--text-primary);
    min-height: 100vh;
    transition: opacity 0.5s ease, transform 0.5s ease;
}

/* Loading screen */
.loading-screen {
    position: fixed;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
    background: var(--primary-bg);
    z-index: 20000;
    transition: opacity 0.5s ease, visibility 0.5s ease;
}
.loading-screen.hidden { opacity: 0; visibility: hidden; }
.loader {
    width: 48px;
    height: 48px;
    border: 4px solid var(--border-color);
    border-top-color: var(--accent-green);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

.dashboard { display: flex; opacity: 0; transition: opacity 0.5s ease; }

/* Sidebar */
.sidebar {
    width: 240px;
    min-height: 100vh;
    background: var(--secondary-bg);
    border-right: 1px solid var(--border-color);
    display: flex;
    flex-direction: column;
    padding: 20px 12px;
    transition: width 0.3s ease, transform 0.3s ease;
}
.sidebar.collapsed { width: 72px; }
.sidebar.collapsed .menu-link span,
.sidebar.collapsed .logo,
.sidebar.collapsed .logout-btn span { display: none; }
.sidebar-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; }
.logo { font-weight: 700; font-size: 18px; }
.sidebar-toggle, .notification-btn, .theme-toggle {
    background: none;
    border: none;
    color: var(--text-secondary);
    font-size: 18px;
    cursor: pointer;
    position: relative;
}
.menu { list-style: none; flex: 1; }
.menu-link {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px 14px;
    border-radius: 10px;
    color: var(--text-secondary);
    text-decoration: none;
    transition: all 0.3s ease;
}
.menu-link:hover { background: var(--hover-bg); color: var(--text-primary); }
.menu-item.active .menu-link { background: var(--accent-green); color: white; }
.logout-btn {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px 14px;
    background: none;
    border: 1px solid var(--border-color);
    border-radius: 10px;
    color: var(--accent-red);
    cursor: pointer;
}

/* Header */
.main { flex: 1; padding: 24px; }
.topbar { display: flex; align-items: center; gap: 20px; margin-bottom: 24px; }
.page-title { font-size: 24px; font-weight: 600; flex: 1; }
.search-box {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 8px 14px;
    border-radius: 10px;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
}
.search-box input { background: transparent; border: none; outline: none; color: var(--text-primary); width: 220px; }
.search-box.active { background: rgba(16, 185, 129, 0.1); }
.topbar-actions { display: flex; gap: 16px; }
.badge {
    position: absolute;
    top: -6px;
    right: -8px;
    background: var(--accent-red);
    color: white;
    font-size: 10px;
    border-radius: 10px;
    padding: 1px 5px;
}

/* Content */
.content-area { transition: opacity 0.2s ease, transform 0.2s ease; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 20px; }
.stat-card, .panel {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 16px;
    padding: 20px;
}
.stat-card { position: relative; overflow: hidden; }
.stat-label { color: var(--text-secondary); font-size: 13px; text-transform: uppercase; letter-spacing: 1px; }
.stat-value { font-size: 28px; font-weight: 700; margin-top: 8px; }
.panels { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin: 20px 0; }
.panel-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.panel-title { font-weight: 600; }
.btn {
    padding: 6px 12px;
    border-radius: 8px;
    border: 1px solid var(--border-color);
    background: var(--hover-bg);
    color: var(--text-primary);
    cursor: pointer;
}

.order-item, .product-item {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px;
    border-radius: 10px;
    cursor: pointer;
    transition: background 0.2s ease;
}
.order-item:hover, .product-item:hover { background: var(--hover-bg); }
.order-info, .product-info { display: flex; flex-direction: column; gap: 4px; }
.order-id { font-family: monospace; font-size: 12px; color: var(--text-secondary); }
.order-details { display: flex; align-items: center; gap: 12px; }
.order-amount, .product-revenue { font-weight: 600; }
.order-status { padding: 4px 10px; border-radius: 20px; font-size: 12px; font-weight: 600; }
.order-status.pending { background: rgba(251, 100, 27, 0.15); color: var(--accent-orange); }
.order-status.delivered, .order-status.completed { background: rgba(16, 185, 129, 0.15); color: var(--accent-green); }
.order-status.shipped, .order-status.processing { background: rgba(59, 130, 246, 0.15); color: var(--accent-blue); }
.order-status.cancelled { background: rgba(239, 68, 68, 0.15); color: var(--accent-red); }
.product-sales { font-size: 12px; color: var(--text-secondary); }

.actions-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; }
.action-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 10px;
    padding: 18px;
    border-radius: 12px;
    background: var(--secondary-bg);
    border: 1px solid var(--border-color);
    cursor: pointer;
    transition: transform 0.15s ease;
}

/* Floating action button and quick-action menu */
.fab {
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 56px;
    height: 56px;
    border-radius: 50%;
    border: none;
    background: var(--accent-green);
    color: white;
    font-size: 20px;
    cursor: pointer;
    box-shadow: var(--shadow-heavy);
}
.quick-action-menu {
    position: fixed;
    bottom: 100px;
    right: 30px;
    background: var(--secondary-bg);
    border: 1px solid var(--border-color);
    border-radius: 16px;
    padding: 10px;
    box-shadow: var(--shadow-heavy);
    z-index: 10000;
    transform: scale(0) translateY(20px);
    transition: all 0.3s ease;
}
.quick-action-menu.open { transform: scale(1) translateY(0); }
.quick-action-item {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px 16px;
    border-radius: 8px;
    cursor: pointer;
    transition: all 0.3s ease;
    white-space: nowrap;
    color: var(--text-secondary);
}
.quick-action-item:hover { background: var(--hover-bg); color: var(--text-primary); transform: translateX(5px); }
.quick-action-item i { width: 16px; text-align: center; }

/* Toasts */
.notification {
    position: fixed;
    right: 20px;
    padding: 15px 20px;
    color: white;
    border-radius: 12px;
    box-shadow: var(--shadow-medium);
    z-index: 10000;
    display: flex;
    align-items: center;
    gap: 10px;
    font-weight: 600;
    transform: translateX(120%);
    transition: transform 0.3s ease;
}
.notification.shown { transform: translateX(0); }

.particle {
    position: fixed;
    border-radius: 50%;
    pointer-events: none;
    z-index: 1000;
}

@media (max-width: 768px) {
    .sidebar { position: fixed; z-index: 500; transform: translateX(-100%); }
    .sidebar.open { transform: translateX(0); }
    .panels { grid-template-columns: 1fr; }
    .search-box input { width: 120px; }
}
";
