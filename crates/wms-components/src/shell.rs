//! Navigation shell: top bar, nav links, mobile slide-out panel

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// The five fixed navigation entries: (path, label, glyph)
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "Dashboard", "▦"),
    ("/warehouses", "Warehouses", "⌂"),
    ("/inventory", "Inventory", "▣"),
    ("/staff", "Staff", "♟"),
    ("/orders", "Orders", "➤"),
];

/// Exact-match active check; `/warehouses` must not light up `/`
pub fn is_active_path(current: &str, target: &str) -> bool {
    current == target
}

#[component]
pub fn NavLink(
    to: &'static str,
    glyph: &'static str,
    label: &'static str,
) -> impl IntoView {
    let location = use_location();
    let class = move || {
        if is_active_path(&location.pathname.get(), to) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <a href=to class=class>
            <span class="nav-icon">{glyph}</span>
            <span class="nav-label">{label}</span>
        </a>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    view! {
        {NAV_ITEMS
            .iter()
            .map(|&(to, label, glyph)| view! { <NavLink to=to glyph=glyph label=label /> })
            .collect_view()}
    }
}

#[component]
pub fn MobileNav(
    #[prop(into)] open: Signal<bool>,
    on_close: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || if open.get() { "mobile-nav open" } else { "mobile-nav" }>
            <div class="mobile-backdrop" on:click=move |_| on_close.set(false) />
            <div class="mobile-panel">
                <div class="mobile-panel-header">
                    <h1 class="brand">"WMS"</h1>
                    <button class="icon-button" on:click=move |_| on_close.set(false)>
                        "✕"
                    </button>
                </div>
                <nav class="mobile-nav-links">
                    <NavLinks />
                </nav>
            </div>
        </div>
    }
}

/// Top navigation bar with brand, links, search box and the mobile toggle
#[component]
pub fn TopNav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (search_focused, set_search_focused) = signal(false);

    view! {
        <header class="top-nav">
            <div class="top-nav-inner">
                <div class="top-nav-left">
                    <button
                        class="icon-button menu-toggle"
                        on:click=move |_| set_menu_open.set(true)
                    >
                        "☰"
                    </button>

                    <h1 class="brand">"WMS"</h1>

                    <nav class="nav-links">
                        <NavLinks />
                    </nav>
                </div>

                <div class="top-nav-right">
                    <div class=move || {
                        if search_focused.get() { "search-box focused" } else { "search-box" }
                    }>
                        <span class="search-icon">"🔍"</span>
                        <input
                            type="text"
                            placeholder="Search..."
                            on:focus=move |_| set_search_focused.set(true)
                            on:blur=move |_| set_search_focused.set(false)
                        />
                    </div>

                    <button class="icon-button bell">
                        "🔔"
                        <span class="bell-dot" />
                    </button>

                    <div class="user-chip">
                        <span class="avatar">"JD"</span>
                        <span class="user-name">"John Doe"</span>
                    </div>
                </div>
            </div>

            <MobileNav open=menu_open on_close=set_menu_open />
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_per_path() {
        for &(current, _, _) in NAV_ITEMS.iter() {
            let active_count = NAV_ITEMS
                .iter()
                .filter(|&&(target, _, _)| is_active_path(current, target))
                .count();
            assert_eq!(active_count, 1, "path {current} should match exactly one entry");
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(!is_active_path("/warehouses", "/"));
        assert!(!is_active_path("/warehouses/42", "/warehouses"));
    }

    #[test]
    fn test_unknown_path_matches_nothing() {
        let active_count = NAV_ITEMS
            .iter()
            .filter(|&&(target, _, _)| is_active_path("/reports", target))
            .count();
        assert_eq!(active_count, 0);
    }
}
