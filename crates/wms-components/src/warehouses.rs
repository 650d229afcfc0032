//! Warehouse list view

use leptos::prelude::*;
use wms_client::fetch_warehouses;
use wms_core::Warehouse;
use wms_state::{use_client, use_remote, RemoteData};

use crate::{ErrorNotice, Spinner};

#[component]
pub fn WarehouseList() -> impl IntoView {
    let client = use_client();
    let state = use_remote(move || async move { fetch_warehouses(&client).await });

    view! {
        <div class="warehouse-page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Warehouses"</h2>
                    <p class="page-subtitle">"Manage your warehouse locations and inventory"</p>
                </div>
                <button class="primary-button">"+ Add Warehouse"</button>
            </div>

            {move || match state.get() {
                RemoteData::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                RemoteData::Ready(warehouses) => view! {
                    <div class="warehouse-grid">
                        {warehouses
                            .into_iter()
                            .map(|wh| view! { <WarehouseCard warehouse=wh /> })
                            .collect_view()}
                    </div>
                }.into_any(),
                _ => view! { <Spinner /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn WarehouseCard(warehouse: Warehouse) -> impl IntoView {
    let status = warehouse.status;
    let location = warehouse.location_line();

    view! {
        <div class="warehouse-card">
            <div class="warehouse-card-top">
                <div>
                    <h3 class="warehouse-name">{warehouse.name}</h3>
                    <div class="warehouse-location">
                        <span class="loc-icon">"◎"</span>
                        <span>{location}</span>
                    </div>
                </div>
                <span class=status.badge_class()>{status.label()}</span>
            </div>

            // Per-card counters are static placeholders; per-warehouse
            // rollups are not wired to any query.
            <div class="warehouse-counters">
                <div class="counter">
                    <span class="counter-icon">"▣"</span>
                    <div>
                        <div class="counter-value">"156"</div>
                        <div class="counter-label">"Items"</div>
                    </div>
                </div>
                <div class="counter">
                    <span class="counter-icon">"➤"</span>
                    <div>
                        <div class="counter-value">"24"</div>
                        <div class="counter-label">"Orders"</div>
                    </div>
                </div>
            </div>

            <div class="warehouse-card-actions">
                <div class="avatar-stack">
                    {(0..3).map(|_| view! { <span class="avatar small">"JD"</span> }).collect_view()}
                </div>
                <div class="action-buttons">
                    <button class="icon-button">"✎"</button>
                    <button class="icon-button danger">"🗑"</button>
                </div>
            </div>
        </div>
    }
}
