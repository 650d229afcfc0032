//! Warehouse Operations Dashboard entry point (CSR)

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wms_client::{ClientConfig, DEFAULT_BASE_URL};
use wms_components::{Dashboard, TopNav, WarehouseList};
use wms_state::provide_client;

/// Backend connection, overridable at build time
fn backend_config() -> ClientConfig {
    let base_url = option_env!("WMS_BACKEND_URL").unwrap_or(DEFAULT_BASE_URL);
    let api_key = option_env!("WMS_API_KEY").unwrap_or("dev-anon-key");
    ClientConfig::new(base_url, api_key)
}

#[component]
fn ComingSoon() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <h2 class="page-title">"Coming Soon"</h2>
            <p class="page-subtitle">"This section is not wired up yet."</p>
        </div>
    }
}

#[component]
fn App() -> impl IntoView {
    let client = provide_client(backend_config());
    tracing::info!(base_url = %client.config().base_url, "backend client configured");

    view! {
        <Router>
            <div class="app-shell">
                <TopNav />
                <main class="app-main">
                    <Routes fallback=ComingSoon>
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/warehouses") view=WarehouseList />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("starting warehouse dashboard");

    leptos::mount::mount_to_body(App);
}
