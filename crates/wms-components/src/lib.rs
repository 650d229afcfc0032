//! # wms-components
//!
//! Leptos UI components for the Warehouse Operations Dashboard: the
//! navigation shell, the dashboard page (statistics grid + charts panel)
//! and the warehouse list.

pub mod charts_panel;
pub mod dashboard;
pub mod shell;
pub mod stats;
pub mod warehouses;

pub use charts_panel::*;
pub use dashboard::*;
pub use shell::*;
pub use stats::*;
pub use warehouses::*;

use leptos::prelude::*;

/// Red notice box replacing a view's content when its fetch failed
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-notice">
            <span class="error-icon">"⚠"</span>
            <span class="error-msg">{message}</span>
        </div>
    }
}

/// Centered spinner shown while a view's queries are in flight
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" />
        </div>
    }
}
