//! Presentation-layer aggregation over already-fetched row sets
//!
//! Every non-trivial computation (filtering, joins, counting) happens in
//! the backend's query layer; the functions here only reduce small result
//! sets into the numbers and chart series the views render. They are kept
//! as pure functions so the views stay thin and the math stays testable.

use crate::{InventoryValueRow, StockMovement, ZoneInventoryRow};
use chrono::{DateTime, Utc};

/// The eight dashboard statistics, in card order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardMetrics {
    pub active_warehouses: u64,
    pub total_products: u64,
    pub active_staff: u64,
    pub pending_orders: u64,
    pub low_stock_items: usize,
    pub total_inventory_value: f64,
    pub completed_orders: u64,
    pub expiring_items: usize,
}

/// Total inventory value: Σ quantity × unit price.
///
/// An empty row set is worth zero, never an error.
pub fn inventory_value(rows: &[InventoryValueRow]) -> f64 {
    rows.iter()
        .map(|row| row.quantity * row.products.unit_price)
        .sum()
}

/// One point of the stock movement series: a calendar date and the summed
/// quantity of every movement on that date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMovement {
    pub date: String,
    pub total_quantity: f64,
}

/// Calendar-date key used for movement buckets (`03/02/2025`)
pub fn movement_date_key(ts: &DateTime<Utc>) -> String {
    ts.format("%m/%d/%Y").to_string()
}

/// Group movements into per-date buckets, summing quantities.
///
/// Bucket order is first-appearance order, which after the backend's
/// `order=created_at` gives chronological buckets. Distinct dates never
/// merge; rows are small enough that the linear bucket lookup is fine.
pub fn bucket_movements(rows: &[StockMovement]) -> Vec<DailyMovement> {
    let mut buckets: Vec<DailyMovement> = Vec::new();

    for row in rows {
        let date = movement_date_key(&row.created_at);
        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.total_quantity += row.quantity,
            None => buckets.push(DailyMovement {
                date,
                total_quantity: row.quantity,
            }),
        }
    }

    buckets
}

/// One slice of the zone distribution chart
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDistribution {
    pub zone_name: String,
    pub total_items: f64,
}

/// Flatten the zone → location → inventory nesting into per-zone totals.
///
/// A zone with no locations (or only empty locations) totals zero and is
/// still reported, so the chart legend stays complete.
pub fn zone_distribution(zones: &[ZoneInventoryRow]) -> Vec<ZoneDistribution> {
    zones
        .iter()
        .map(|zone| ZoneDistribution {
            zone_name: zone.name.clone(),
            total_items: zone
                .storage_locations
                .iter()
                .flat_map(|location| &location.inventory)
                .map(|inv| inv.quantity)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InventoryQuantity, LocationInventory, ProductUnitPrice};
    use chrono::TimeZone;

    fn value_row(quantity: f64, unit_price: f64) -> InventoryValueRow {
        InventoryValueRow {
            quantity,
            products: ProductUnitPrice { unit_price },
        }
    }

    fn movement(ts: &str, quantity: f64) -> StockMovement {
        StockMovement {
            created_at: ts.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_inventory_value_sum_product() {
        let rows = vec![value_row(2.0, 10.0), value_row(1.0, 5.0)];
        assert_eq!(inventory_value(&rows), 25.0);
    }

    #[test]
    fn test_inventory_value_empty_is_zero() {
        assert_eq!(inventory_value(&[]), 0.0);
    }

    #[test]
    fn test_bucket_movements_same_day_sums() {
        let rows = vec![
            movement("2025-03-01T08:00:00Z", 5.0),
            movement("2025-03-01T17:30:00Z", 3.0),
            movement("2025-03-02T09:00:00Z", 2.0),
        ];

        let buckets = bucket_movements(&rows);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, "03/01/2025");
        assert_eq!(buckets[0].total_quantity, 8.0);
        assert_eq!(buckets[1].date, "03/02/2025");
        assert_eq!(buckets[1].total_quantity, 2.0);
    }

    #[test]
    fn test_bucket_movements_distinct_dates_never_merge() {
        let rows = vec![
            movement("2025-03-01T23:59:59Z", 1.0),
            movement("2025-03-02T00:00:00Z", 1.0),
        ];

        let buckets = bucket_movements(&rows);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn test_bucket_movements_preserves_backend_order() {
        let rows = vec![
            movement("2025-03-03T10:00:00Z", 1.0),
            movement("2025-03-01T10:00:00Z", 1.0),
            movement("2025-03-03T12:00:00Z", 4.0),
        ];

        // First appearance wins the slot, even when a later row
        // belongs to an earlier bucket.
        let buckets = bucket_movements(&rows);
        assert_eq!(buckets[0].date, "03/03/2025");
        assert_eq!(buckets[0].total_quantity, 5.0);
        assert_eq!(buckets[1].date, "03/01/2025");
    }

    #[test]
    fn test_bucket_movements_signed_deltas() {
        let rows = vec![
            movement("2025-03-01T08:00:00Z", 10.0),
            movement("2025-03-01T09:00:00Z", -4.0),
        ];

        let buckets = bucket_movements(&rows);
        assert_eq!(buckets[0].total_quantity, 6.0);
    }

    #[test]
    fn test_movement_date_key_format() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 2, 8, 30, 0).unwrap();
        assert_eq!(movement_date_key(&ts), "03/02/2025");
    }

    #[test]
    fn test_zone_distribution_transitive_sum() {
        let zones = vec![ZoneInventoryRow {
            name: "Zone A".to_string(),
            storage_locations: vec![
                LocationInventory {
                    inventory: vec![
                        InventoryQuantity { quantity: 4.0 },
                        InventoryQuantity { quantity: 6.0 },
                    ],
                },
                LocationInventory {
                    inventory: vec![InventoryQuantity { quantity: 5.0 }],
                },
            ],
        }];

        let dist = zone_distribution(&zones);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].zone_name, "Zone A");
        assert_eq!(dist[0].total_items, 15.0);
    }

    #[test]
    fn test_zone_distribution_zero_locations() {
        let zones = vec![
            ZoneInventoryRow {
                name: "Empty".to_string(),
                storage_locations: vec![],
            },
            ZoneInventoryRow {
                name: "Bare".to_string(),
                storage_locations: vec![LocationInventory { inventory: vec![] }],
            },
        ];

        let dist = zone_distribution(&zones);
        assert_eq!(dist[0].total_items, 0.0);
        assert_eq!(dist[1].total_items, 0.0);
    }
}
