//! Dashboard fan-out fetchers
//!
//! Each view gets one async entry point here. The metrics aggregator
//! issues its eight queries concurrently and joins them all-or-error:
//! the first failure wins and partial results are abandoned, so a view
//! never renders half a statistic grid.

use crate::{BackendClient, FetchError, Query};
use chrono::{Duration, SecondsFormat, Utc};
use wms_core::{
    bucket_movements, inventory_value, zone_distribution, DailyMovement, DashboardMetrics,
    InventoryRecord, InventoryValueRow, LowStockRow, StockMovement, Warehouse, ZoneDistribution,
    ZoneInventoryRow,
};

/// Window for the "Expiring Soon" statistic
const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Window for the stock movement series
const MOVEMENT_WINDOW_DAYS: i64 = 7;

/// `Z`-suffixed RFC 3339, safe to embed in a filter value unescaped
fn filter_timestamp(offset_days: i64) -> String {
    (Utc::now() + Duration::days(offset_days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Fetch the eight dashboard statistics.
///
/// Five count-only queries and three row-set queries, issued concurrently.
/// Empty row sets reduce to zeros; only a rejected query is an error.
pub async fn fetch_dashboard_metrics(
    client: &BackendClient,
) -> Result<DashboardMetrics, FetchError> {
    let expiry_cutoff = filter_timestamp(EXPIRY_WINDOW_DAYS);

    let (
        active_warehouses,
        total_products,
        active_staff,
        pending_orders,
        completed_orders,
        low_stock_rows,
        value_rows,
        expiring_rows,
    ) = futures::try_join!(
        client.count(Query::from("warehouses").eq("status", "active")),
        client.count(Query::from("products")),
        client.count(Query::from("staff").eq("status", "active")),
        client.count(Query::from("purchase_orders").eq("status", "pending")),
        client.count(Query::from("purchase_orders").eq("status", "completed")),
        client.rows::<LowStockRow>(
            Query::from("inventory")
                .select("product_id,quantity,products!inner(minimum_stock)")
                .lt("quantity", "products.minimum_stock"),
        ),
        client.rows::<InventoryValueRow>(
            Query::from("inventory").select("quantity,products!inner(unit_price)"),
        ),
        client.rows::<InventoryRecord>(
            Query::from("inventory")
                .not_null("expiry_date")
                .lte("expiry_date", &expiry_cutoff),
        ),
    )?;

    Ok(DashboardMetrics {
        active_warehouses,
        total_products,
        active_staff,
        pending_orders,
        low_stock_items: low_stock_rows.len(),
        total_inventory_value: inventory_value(&value_rows),
        completed_orders,
        expiring_items: expiring_rows.len(),
    })
}

/// Chart panel data: both series, or one shared error
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub movements: Vec<DailyMovement>,
    pub zones: Vec<ZoneDistribution>,
}

/// Fetch and transform both chart series.
///
/// Stock movements of the last seven days grouped per calendar date, and
/// the zone → location → inventory nesting flattened to per-zone totals.
pub async fn fetch_chart_data(client: &BackendClient) -> Result<ChartData, FetchError> {
    let since = filter_timestamp(-MOVEMENT_WINDOW_DAYS);

    let (movements, zones) = futures::try_join!(
        client.rows::<StockMovement>(
            Query::from("stock_movements")
                .select("created_at,quantity")
                .gte("created_at", &since)
                .order("created_at"),
        ),
        client.rows::<ZoneInventoryRow>(
            Query::from("zones").select("name,storage_locations!inner(inventory!inner(quantity))"),
        ),
    )?;

    Ok(ChartData {
        movements: bucket_movements(&movements),
        zones: zone_distribution(&zones),
    })
}

/// Fetch every warehouse row, ordered by name
pub async fn fetch_warehouses(client: &BackendClient) -> Result<Vec<Warehouse>, FetchError> {
    client.rows(Query::from("warehouses").order("name")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_timestamp_is_zulu() {
        let ts = filter_timestamp(30);
        assert!(ts.ends_with('Z'));
        assert!(!ts.contains('+'));
    }

    #[test]
    fn test_filter_timestamp_past_window() {
        let since = filter_timestamp(-MOVEMENT_WINDOW_DAYS);
        let now = filter_timestamp(0);
        assert!(since < now);
    }

    // The metrics aggregator joins its queries with try_join!; these pin
    // the all-or-error semantics that keeps partial statistic grids from
    // ever rendering.

    #[test]
    fn test_fan_in_surfaces_a_rejected_query() {
        let active = async { Ok::<u64, FetchError>(3) };
        let rejected = async {
            Err::<u64, FetchError>(FetchError::Http {
                status: 400,
                message: "invalid filter".to_string(),
            })
        };
        let rows = async { Ok::<Vec<f64>, FetchError>(vec![2.0, 1.0]) };

        let joined =
            futures::executor::block_on(async { futures::try_join!(active, rejected, rows) });

        let err = joined.expect_err("one rejected query must fail the whole join");
        assert_eq!(err.to_string(), "query rejected (400): invalid filter");
    }

    #[test]
    fn test_fan_in_settles_when_every_query_succeeds() {
        let joined = futures::executor::block_on(async {
            futures::try_join!(
                async { Ok::<u64, FetchError>(3) },
                async { Ok::<u64, FetchError>(50) },
            )
        });

        assert_eq!(joined.unwrap(), (3, 50));
    }
}
