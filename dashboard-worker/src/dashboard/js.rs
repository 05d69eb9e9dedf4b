//! Dashboard JavaScript
//!
//! Thin DOM glue for the admin dashboard. Timings, tables, styles and
//! message text come from the inlined `UI` manifest; order data arrives
//! pre-rendered from `/api/dashboard` and `/api/orders/pending`.

pub const SCRIPT: &str = r#"
// ============================================================================
// State
// ============================================================================
let salesChart = null;
let quickMenu = null;
let quickMenuOpenedAt = 0;
let statsLoaded = false;
const counterTimers = new WeakMap();

const $ = (sel) => document.querySelector(sel);
const $$ = (sel) => document.querySelectorAll(sel);
const fill = (template, key, value) => template.replace(`{${key}}`, () => value);

// ============================================================================
// API Functions
// ============================================================================
async function fetchJSON(endpoint) {
    try {
        const res = await fetch(endpoint);
        return await res.json();
    } catch (e) {
        console.error(`Error fetching ${endpoint}:`, e);
        return null;
    }
}

// ============================================================================
// Notifications
// ============================================================================
function showNotification(message, type = 'info') {
    const kind = UI.notification.kinds[type] || UI.notification.kinds.info;
    renderNotification({ message, icon: kind.icon, color: kind.color, visible_ms: UI.notification.visible_ms });
}

function renderNotification(n) {
    const el = document.createElement('div');
    el.className = 'notification';
    el.style.background = n.color;
    el.style.top = `${20 + $$('.notification').length * 70}px`;
    const icon = document.createElement('i');
    icon.className = `fas fa-${n.icon}`;
    const text = document.createElement('span');
    text.textContent = n.message;
    el.append(icon, text);
    document.body.appendChild(el);

    setTimeout(() => el.classList.add('shown'), UI.notification.enter_delay_ms);
    setTimeout(() => {
        el.classList.remove('shown');
        setTimeout(() => el.remove(), UI.notification.exit_ms);
    }, n.visible_ms);
}

// ============================================================================
// Dashboard data
// ============================================================================
function animateCounter(el, counter) {
    clearTimeout(counterTimers.get(el));
    el.dataset.target = counter.target;
    const format = (v) => (counter.currency || '') + Math.floor(v).toLocaleString('en-US');
    let current = 0;
    const step = () => {
        current += counter.increment;
        if (current >= counter.target) {
            el.textContent = counter.final_text;
            counterTimers.delete(el);
            return;
        }
        el.textContent = format(current);
        counterTimers.set(el, setTimeout(step, UI.counter.frame_ms));
    };
    if (counter.target > 0 && counter.increment > 0) step();
}

// A newer plan for a card cancels the one still running on it
function animateCounters(counters) {
    for (const counter of counters) {
        const el = $(`[data-stat="${counter.stat}"]`);
        if (el) animateCounter(el, counter);
    }
}

function placeholderCounters() {
    return UI.counter.stats.map(stat => {
        const el = $(`[data-stat="${stat}"]`);
        const target = el ? Number(el.dataset.target) : 0;
        const currency = stat === 'revenue' ? UI.currency_symbol : null;
        return {
            stat,
            target,
            increment: target / (UI.counter.duration_ms / UI.counter.frame_ms),
            currency,
            final_text: (currency || '') + target.toLocaleString('en-US'),
        };
    });
}

function drawChart(config) {
    const canvas = document.getElementById('salesChart');
    if (!canvas || !config || typeof Chart === 'undefined') return;
    if (salesChart) salesChart.destroy();
    salesChart = new Chart(canvas.getContext('2d'), config);
}

async function loadDashboard() {
    const data = await fetchJSON(UI.endpoints.dashboard);
    if (!data) {
        $('.orders-list').innerHTML = `<p>${UI.messages.orders_error}</p>`;
        $('.products-list').innerHTML = `<p>${UI.messages.products_error}</p>`;
        showNotification(UI.messages.orders_error, 'error');
        return;
    }
    $('.orders-list').innerHTML = data.orders_html;
    $('.products-list').innerHTML = data.products_html;
    bindListClicks();
    statsLoaded = true;
    animateCounters(data.stats);
    drawChart(data.chart);
    if (data.notification) renderNotification(data.notification);
}

async function loadPending() {
    const data = await fetchJSON(UI.endpoints.pending);
    if (!data) {
        $('.orders-list').innerHTML = `<p>${UI.messages.pending_error}</p>`;
        showNotification(UI.messages.pending_error, 'error');
        return;
    }
    $('.orders-list').innerHTML = data.orders_html;
    bindListClicks();
    if (data.notification) renderNotification(data.notification);
}

function bindListClicks() {
    $$('.order-item').forEach(item => {
        item.addEventListener('click', () => showNotification(fill(UI.messages.viewing_order, 'id', item.dataset.orderId), 'info'));
    });
    $$('.product-item').forEach(item => {
        item.addEventListener('click', () => showNotification(fill(UI.messages.viewing_product, 'name', item.dataset.productName), 'info'));
    });
}

// ============================================================================
// Layout: sidebar, navigation, search, theme
// ============================================================================
const isMobile = () => window.innerWidth <= UI.mobile_breakpoint_px;

function initLayout() {
    const sidebar = $('#sidebar');
    const toggle = $('#sidebarToggle');

    toggle.addEventListener('click', () => {
        sidebar.classList.toggle('collapsed');
        if (isMobile()) sidebar.classList.toggle('open');
    });

    document.addEventListener('click', (e) => {
        if (isMobile() && !sidebar.contains(e.target) && !toggle.contains(e.target)) {
            sidebar.classList.remove('open');
        }
    });

    $$('.menu-link').forEach(link => {
        link.addEventListener('click', (e) => {
            e.preventDefault();
            $$('.menu-item').forEach(item => item.classList.remove('active'));
            link.parentElement.classList.add('active');
            const page = link.dataset.page;
            $('.page-title').textContent = page.charAt(0).toUpperCase() + page.slice(1);

            const content = $('.content-area');
            content.style.opacity = String(UI.content_fade_opacity);
            content.style.transform = 'translateY(20px)';
            setTimeout(() => {
                content.style.opacity = '1';
                content.style.transform = 'translateY(0)';
            }, UI.content_fade_ms);
        });
    });

    const search = $('.search-box input');
    search.addEventListener('input', (e) => {
        const term = e.target.value.toLowerCase();
        console.log(fill(UI.messages.search, 'term', term));
        $('.search-box').classList.toggle('active', term.length > 0);
    });

    $('.notification-btn').addEventListener('click', () => {
        showNotification(UI.messages.notifications, 'info');
    });

    const themeToggle = $('.theme-toggle');
    themeToggle.addEventListener('click', () => {
        const dark = document.body.classList.toggle(UI.theme.dark_class);
        themeToggle.querySelector('i').className = `fas ${dark ? UI.theme.dark_icon : UI.theme.light_icon}`;
    });

    $('.logout-btn').addEventListener('click', () => {
        if (!confirm(UI.messages.logout_confirm)) return;
        document.body.style.opacity = '0';
        document.body.style.transform = 'scale(0.95)';
        setTimeout(() => { window.location.href = UI.logout.redirect; }, UI.logout.fade_ms);
    });
}

// ============================================================================
// Quick actions
// ============================================================================
function closeQuickMenu() {
    if (!quickMenu) return;
    const menu = quickMenu;
    quickMenu = null;
    menu.classList.remove('open');
    setTimeout(() => menu.remove(), UI.menu.close_ms);
}

function openQuickMenu() {
    if (quickMenu) return;
    const menu = document.createElement('div');
    menu.className = 'quick-action-menu';
    for (const action of UI.menu.actions) {
        const item = document.createElement('div');
        item.className = 'quick-action-item';
        item.dataset.action = action.id;
        const icon = document.createElement('i');
        icon.className = `fas fa-${action.icon}`;
        const label = document.createElement('span');
        label.textContent = action.label;
        item.append(icon, label);
        item.addEventListener('click', () => {
            showNotification(fill(UI.messages.clicked, 'label', action.label), 'success');
            quickMenu = null;
            menu.remove();
        });
        menu.appendChild(item);
    }
    document.body.appendChild(menu);
    quickMenu = menu;
    quickMenuOpenedAt = Date.now();
    setTimeout(() => menu.classList.add('open'), 10);
}

function initQuickActions() {
    const fab = $('#fab');
    fab.addEventListener('click', openQuickMenu);

    document.addEventListener('click', (e) => {
        if (!quickMenu || Date.now() - quickMenuOpenedAt < UI.menu.open_delay_ms) return;
        if (!quickMenu.contains(e.target) && !fab.contains(e.target)) closeQuickMenu();
    });

    $$('.action-card').forEach(card => {
        card.addEventListener('click', () => {
            const label = card.querySelector('span').textContent;
            showNotification(fill(UI.messages.clicked, 'label', label), 'success');
            card.style.transform = 'scale(0.95)';
            setTimeout(() => { card.style.transform = ''; }, UI.card_press_ms);
        });
    });

    $('#viewAllPendingBtn').addEventListener('click', loadPending);
}

// ============================================================================
// Keyboard shortcuts
// ============================================================================
function initShortcuts() {
    document.addEventListener('keydown', (e) => {
        const shortcut = UI.shortcuts.find(s => s.key === e.key && (e.ctrlKey || !s.ctrl));
        if (!shortcut) return;
        if (shortcut.prevent_default) e.preventDefault();
        switch (shortcut.command) {
            case 'focus-search': $('.search-box input').focus(); break;
            case 'toggle-sidebar': $('#sidebar').classList.toggle('collapsed'); break;
            case 'close-menu':
                if (quickMenu) { quickMenu.remove(); quickMenu = null; }
                break;
        }
    });
}

// ============================================================================
// Hover particles
// ============================================================================
function spawnParticles(card) {
    const rect = card.getBoundingClientRect();
    const p = UI.particles;
    for (let i = 0; i < p.count; i++) {
        const dot = document.createElement('div');
        dot.className = 'particle';
        dot.style.width = dot.style.height = `${p.size_px}px`;
        dot.style.background = p.color;
        dot.style.left = `${rect.left + Math.random() * rect.width}px`;
        dot.style.top = `${rect.top + Math.random() * rect.height}px`;
        document.body.appendChild(dot);
        dot.animate([
            { transform: 'translateY(0) scale(1)', opacity: 1 },
            { transform: `translateY(-${p.rise_px}px) scale(${p.end_scale})`, opacity: 0 }
        ], { duration: p.duration_ms, easing: 'ease-out' }).onfinish = () => dot.remove();
    }
}

function initAnimations() {
    $$('[data-animate]').forEach((el, i) => {
        el.style.opacity = '0';
        el.style.transform = 'translateY(20px)';
        setTimeout(() => {
            el.style.transition = 'opacity 0.5s ease, transform 0.5s ease';
            el.style.opacity = '1';
            el.style.transform = 'translateY(0)';
        }, i * 100);
    });
    $$('.stat-card').forEach(card => card.addEventListener('mouseenter', () => spawnParticles(card)));
}

// ============================================================================
// Initialize
// ============================================================================
document.addEventListener('DOMContentLoaded', () => {
    initLayout();
    initQuickActions();
    initShortcuts();

    setTimeout(() => {
        $('#loadingScreen').classList.add('hidden');
        $('#dashboard').style.opacity = '1';
        initAnimations();
        loadDashboard();
        // Live stats were already animated when they arrived
        setTimeout(() => {
            if (!statsLoaded) animateCounters(placeholderCounters());
        }, UI.counter.start_delay_ms);
    }, UI.loading_delay_ms);

    setInterval(() => console.log('Current time:', new Date().toLocaleTimeString()), 1000);
});

// loadEventEnd is only filled in once the load handlers have returned
window.addEventListener('load', () => setTimeout(() => {
    const navigation = performance.getEntriesByType('navigation')[0];
    if (navigation) {
        console.log('Page load time:', navigation.loadEventEnd - navigation.loadEventStart, 'ms');
    }
}, 0));
"#;
