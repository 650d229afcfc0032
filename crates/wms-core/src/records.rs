//! Backend table rows read by the dashboard
//!
//! All entities are created and mutated server-side; this application
//! only deserializes them.

use crate::{EntityStatus, OrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A warehouse row from the `warehouses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub status: EntityStatus,
}

impl Warehouse {
    /// "City, Country" line shown under the warehouse name
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// A product row from the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub minimum_stock: f64,
    pub unit_price: f64,
}

/// A staff row from the `staff` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub status: EntityStatus,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A purchase order row from the `purchase_orders` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub order_number: String,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_location_line() {
        let json = r#"{
            "id": "5f8a1c2e-9b3d-4e6f-8a1c-2e9b3d4e6f8a",
            "name": "Central Hub",
            "address": "12 Dock Rd",
            "city": "Rotterdam",
            "postal_code": "3011",
            "country": "Netherlands",
            "status": "active"
        }"#;

        let wh: Warehouse = serde_json::from_str(json).unwrap();
        assert_eq!(wh.location_line(), "Rotterdam, Netherlands");
        assert!(wh.status.is_active());
    }

    #[test]
    fn test_staff_full_name() {
        let json = r#"{
            "id": "5f8a1c2e-9b3d-4e6f-8a1c-2e9b3d4e6f8a",
            "first_name": "Ana",
            "last_name": "Costa",
            "status": "inactive"
        }"#;

        let staff: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(staff.full_name(), "Ana Costa");
        assert!(!staff.status.is_active());
    }
}
