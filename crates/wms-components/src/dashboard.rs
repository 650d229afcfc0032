//! Main dashboard page: statistics grid and charts panel

use chrono::Local;
use leptos::prelude::*;

use crate::{DashboardCharts, DashboardStats};

#[component]
pub fn Dashboard() -> impl IntoView {
    let last_updated = Local::now().format("%m/%d/%Y, %H:%M:%S").to_string();

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h2 class="page-title">"Dashboard"</h2>
                <div class="last-updated">"Last updated: " {last_updated}</div>
            </div>

            <DashboardStats />
            <DashboardCharts />
        </div>
    }
}
