//! Dashboard statistics grid
//!
//! Eight metric cards fed by one fan-out fetch. The view renders either
//! the full grid or the error notice; there is no partial-metrics state.

use leptos::prelude::*;
use wms_client::fetch_dashboard_metrics;
use wms_core::{colors, DashboardMetrics, UsdFormatter, ValueFormatter};
use wms_state::{use_client, use_remote, RemoteData};

use crate::ErrorNotice;

struct StatCard {
    title: &'static str,
    value: String,
    glyph: &'static str,
    accent: &'static str,
}

fn stat_cards(metrics: &DashboardMetrics) -> Vec<StatCard> {
    let usd = UsdFormatter;
    vec![
        StatCard {
            title: "Active Warehouses",
            value: metrics.active_warehouses.to_string(),
            glyph: "⌂",
            accent: colors::PRIMARY,
        },
        StatCard {
            title: "Total Products",
            value: metrics.total_products.to_string(),
            glyph: "▣",
            accent: colors::POSITIVE,
        },
        StatCard {
            title: "Active Staff",
            value: metrics.active_staff.to_string(),
            glyph: "♟",
            accent: colors::ACCENT,
        },
        StatCard {
            title: "Pending Orders",
            value: metrics.pending_orders.to_string(),
            glyph: "➤",
            accent: colors::WARN,
        },
        StatCard {
            title: "Low Stock Items",
            value: metrics.low_stock_items.to_string(),
            glyph: "⚠",
            accent: colors::NEGATIVE,
        },
        StatCard {
            title: "Inventory Value",
            value: usd.format(metrics.total_inventory_value),
            glyph: "⬈",
            accent: colors::POSITIVE,
        },
        StatCard {
            title: "Completed Orders",
            value: metrics.completed_orders.to_string(),
            glyph: "✓",
            accent: colors::PRIMARY,
        },
        StatCard {
            title: "Expiring Soon",
            value: metrics.expiring_items.to_string(),
            glyph: "◷",
            accent: colors::WARN,
        },
    ]
}

#[component]
pub fn DashboardStats() -> impl IntoView {
    let client = use_client();
    let state = use_remote(move || async move { fetch_dashboard_metrics(&client).await });

    view! {
        {move || match state.get() {
            RemoteData::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
            RemoteData::Ready(metrics) => view! {
                <div class="stats-grid">
                    {stat_cards(&metrics)
                        .into_iter()
                        .map(|card| view! {
                            <div class="stat-card">
                                <div class="stat-card-header">
                                    <h3 class="stat-title">{card.title}</h3>
                                    <span
                                        class="stat-glyph"
                                        style=format!("color: {}", card.accent)
                                    >
                                        {card.glyph}
                                    </span>
                                </div>
                                <p class="stat-value">{card.value}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            }.into_any(),
            // Idle/Loading: same grid shape, pulsing placeholders
            _ => view! {
                <div class="stats-grid">
                    {stat_cards(&DashboardMetrics::default())
                        .into_iter()
                        .map(|card| view! {
                            <div class="stat-card">
                                <div class="stat-card-header">
                                    <h3 class="stat-title">{card.title}</h3>
                                    <span
                                        class="stat-glyph"
                                        style=format!("color: {}", card.accent)
                                    >
                                        {card.glyph}
                                    </span>
                                </div>
                                <p class="stat-value pulse">"..."</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_cards_in_order() {
        let cards = stat_cards(&DashboardMetrics::default());
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].title, "Active Warehouses");
        assert_eq!(cards[5].title, "Inventory Value");
        assert_eq!(cards[7].title, "Expiring Soon");
    }

    #[test]
    fn test_inventory_value_card_is_usd() {
        let metrics = DashboardMetrics {
            total_inventory_value: 25.0,
            ..Default::default()
        };
        let cards = stat_cards(&metrics);
        assert_eq!(cards[5].value, "$25");
    }

    #[test]
    fn test_count_cards_render_plain_numbers() {
        let metrics = DashboardMetrics {
            active_warehouses: 3,
            total_products: 50,
            ..Default::default()
        };
        let cards = stat_cards(&metrics);
        assert_eq!(cards[0].value, "3");
        assert_eq!(cards[1].value, "50");
        assert_eq!(cards[4].value, "0");
        assert_eq!(cards[7].value, "0");
    }
}
