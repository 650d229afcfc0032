//! Inventory, stock movement and zone rows
//!
//! Includes the narrow "read shapes" returned by joined selects: the
//! backend projects only the columns the dashboard asks for, so these
//! structs mirror the select lists rather than full table rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A full inventory row (used by the expiring-items query, `select=*`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub quantity: f64,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// A stock movement row: `select=created_at,quantity`
///
/// `quantity` is a signed delta; receipts are positive, issues negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub created_at: DateTime<Utc>,
    pub quantity: f64,
}

// ============================================================================
// JOINED READ SHAPES
// ============================================================================

/// Row shape for the inventory-value query:
/// `select=quantity,products!inner(unit_price)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryValueRow {
    pub quantity: f64,
    pub products: ProductUnitPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUnitPrice {
    pub unit_price: f64,
}

/// Row shape for the low-stock query:
/// `select=product_id,quantity,products!inner(minimum_stock)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockRow {
    pub product_id: Uuid,
    pub quantity: f64,
    pub products: ProductThreshold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductThreshold {
    pub minimum_stock: f64,
}

/// Row shape for the zone-distribution query:
/// `select=name,storage_locations!inner(inventory!inner(quantity))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInventoryRow {
    pub name: String,
    pub storage_locations: Vec<LocationInventory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInventory {
    pub inventory: Vec<InventoryQuantity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryQuantity {
    pub quantity: f64,
}
