//! Dashboard charts panel
//!
//! Two charts, one fetch: the stock movement series and the zone
//! distribution arrive from a single all-or-error join, so the panel
//! shares one loading state and one error notice.

use leptos::prelude::*;
use wms_charts::{LineChartConfig, PieChart, PieChartConfig, SeriesPoint, TimeSeriesChart};
use wms_client::{fetch_chart_data, ChartData};
use wms_state::{use_client, use_remote, RemoteData};

use crate::{ErrorNotice, Spinner};

fn movement_series(data: &ChartData) -> Vec<SeriesPoint> {
    data.movements
        .iter()
        .map(|m| SeriesPoint::new(m.date.clone(), m.total_quantity))
        .collect()
}

fn zone_series(data: &ChartData) -> Vec<SeriesPoint> {
    data.zones
        .iter()
        .map(|z| SeriesPoint::new(z.zone_name.clone(), z.total_items))
        .collect()
}

#[component]
pub fn DashboardCharts() -> impl IntoView {
    let client = use_client();
    let state = use_remote(move || async move { fetch_chart_data(&client).await });

    view! {
        {move || match state.get() {
            RemoteData::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
            RemoteData::Ready(data) => {
                let movements = movement_series(&data);
                let zones = zone_series(&data);
                view! {
                    <div class="charts-grid">
                        <div class="panel">
                            <TimeSeriesChart
                                series=Signal::derive(move || movements.clone())
                                config=LineChartConfig {
                                    title: "Stock Movements (Last 7 Days)".to_string(),
                                    series_label: "Stock Movements".to_string(),
                                    ..Default::default()
                                }
                            />
                        </div>
                        <div class="panel">
                            <PieChart
                                series=Signal::derive(move || zones.clone())
                                config=PieChartConfig {
                                    title: "Inventory Distribution by Zone".to_string(),
                                    ..Default::default()
                                }
                            />
                        </div>
                    </div>
                }.into_any()
            }
            _ => view! { <Spinner /> }.into_any(),
        }}
    }
}
