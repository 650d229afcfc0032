//! Seeded in-memory tables and the query grammar evaluator
//!
//! Rows are stored as JSON values with joined objects pre-embedded
//! (`inventory.products`, `zones.storage_locations`), so the dashboard's
//! nested selects work without a real query planner. The `select` list is
//! accepted but not projected; clients ignore the extra columns.

use std::collections::HashMap;

use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::{json, Value};
use uuid::Uuid;

/// All mock tables, keyed by table name
pub struct Store {
    tables: HashMap<String, Vec<Value>>,
}

impl Store {
    pub fn table(&self, name: &str) -> Option<&[Value]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}

// ============================================================================
// QUERY EVALUATION
// ============================================================================

/// One parsed `column=op.value` predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(String, String),
    Lt(String, String),
    Gte(String, String),
    Lte(String, String),
    NotNull(String),
}

/// Parse a raw query pair into a predicate, if it is one.
///
/// `select`, `order` and `limit` are handled separately and return None.
pub fn parse_predicate(key: &str, value: &str) -> Option<Predicate> {
    if matches!(key, "select" | "order" | "limit") {
        return None;
    }

    if value == "not.is.null" {
        return Some(Predicate::NotNull(key.to_string()));
    }

    let (op, operand) = value.split_once('.')?;
    let predicate = match op {
        "eq" => Predicate::Eq(key.to_string(), operand.to_string()),
        "lt" => Predicate::Lt(key.to_string(), operand.to_string()),
        "gte" => Predicate::Gte(key.to_string(), operand.to_string()),
        "lte" => Predicate::Lte(key.to_string(), operand.to_string()),
        _ => return None,
    };
    Some(predicate)
}

/// Resolve a dotted column path inside a row (`products.minimum_stock`)
fn resolve<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = row;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Operand semantics: a literal number, a literal string, or, when the
/// operand names a column present in the row, that column's value.
fn operand_value(row: &Value, operand: &str) -> Value {
    if let Some(referenced) = resolve(row, operand) {
        return referenced.clone();
    }
    if let Ok(n) = operand.parse::<f64>() {
        return json!(n);
    }
    Value::String(operand.to_string())
}

fn compare(lhs: &Value, rhs: &Value) -> Option<std::cmp::Ordering> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

impl Predicate {
    pub fn matches(&self, row: &Value) -> bool {
        match self {
            Self::Eq(column, operand) => {
                let Some(lhs) = resolve(row, column) else {
                    return false;
                };
                compare(lhs, &operand_value(row, operand))
                    .is_some_and(|ord| ord == std::cmp::Ordering::Equal)
            }
            Self::Lt(column, operand) => self.ordered(row, column, operand, |ord| ord.is_lt()),
            Self::Gte(column, operand) => self.ordered(row, column, operand, |ord| ord.is_ge()),
            Self::Lte(column, operand) => self.ordered(row, column, operand, |ord| ord.is_le()),
            Self::NotNull(column) => resolve(row, column).is_some_and(|v| !v.is_null()),
        }
    }

    fn ordered(
        &self,
        row: &Value,
        column: &str,
        operand: &str,
        check: fn(std::cmp::Ordering) -> bool,
    ) -> bool {
        let Some(lhs) = resolve(row, column) else {
            return false;
        };
        compare(lhs, &operand_value(row, operand)).is_some_and(check)
    }
}

/// Apply predicates, ordering and limit to a table's rows
pub fn evaluate(
    rows: &[Value],
    predicates: &[Predicate],
    order: Option<&str>,
    limit: Option<usize>,
) -> (Vec<Value>, usize) {
    let mut matched: Vec<Value> = rows
        .iter()
        .filter(|row| predicates.iter().all(|p| p.matches(row)))
        .cloned()
        .collect();

    if let Some(order) = order {
        let column = order.strip_suffix(".asc").unwrap_or(order);
        matched.sort_by(|a, b| {
            let lhs = resolve(a, column);
            let rhs = resolve(b, column);
            match (lhs, rhs) {
                (Some(l), Some(r)) => compare(l, r).unwrap_or(std::cmp::Ordering::Equal),
                _ => std::cmp::Ordering::Equal,
            }
        });
    }

    let total = matched.len();
    if let Some(limit) = limit {
        matched.truncate(limit);
    }

    (matched, total)
}

// ============================================================================
// SEED DATA
// ============================================================================

const WAREHOUSE_NAMES: [(&str, &str, &str); 6] = [
    ("Central Hub", "Rotterdam", "Netherlands"),
    ("North Depot", "Hamburg", "Germany"),
    ("East Terminal", "Gdansk", "Poland"),
    ("South Yard", "Valencia", "Spain"),
    ("West Dock", "Antwerp", "Belgium"),
    ("Overflow Annex", "Lyon", "France"),
];

const ZONE_NAMES: [&str; 5] = ["Receiving", "Cold Storage", "Bulk", "Picking", "Dispatch"];

pub fn seed() -> Store {
    let mut rng = rand::thread_rng();
    let mut tables = HashMap::new();

    // Warehouses: one inactive so the active count differs from the total
    let warehouses: Vec<Value> = WAREHOUSE_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, city, country))| {
            json!({
                "id": Uuid::new_v4(),
                "name": name,
                "address": format!("{} Dock Rd", i + 1),
                "city": city,
                "postal_code": format!("{:04}", 1000 + i * 37),
                "country": country,
                "status": if i == WAREHOUSE_NAMES.len() - 1 { "inactive" } else { "active" },
            })
        })
        .collect();

    let products: Vec<Value> = (0..40)
        .map(|i| {
            json!({
                "id": Uuid::new_v4(),
                "name": format!("Product {:03}", i + 1),
                "sku": format!("SKU-{:05}", 10000 + i * 7),
                "minimum_stock": rng.gen_range(5..30),
                "unit_price": (rng.gen_range(150..12000) as f64) / 100.0,
            })
        })
        .collect();

    let staff: Vec<Value> = (0..12)
        .map(|i| {
            json!({
                "id": Uuid::new_v4(),
                "first_name": format!("First{}", i + 1),
                "last_name": format!("Last{}", i + 1),
                "status": if i % 5 == 4 { "inactive" } else { "active" },
            })
        })
        .collect();

    let purchase_orders: Vec<Value> = (0..30)
        .map(|i| {
            let status = match i % 3 {
                0 => "pending",
                1 => "completed",
                _ => "cancelled",
            };
            json!({
                "id": Uuid::new_v4(),
                "order_number": format!("PO-{:06}", 420000 + i),
                "status": status,
            })
        })
        .collect();

    // Inventory rows embed the joined product columns the dashboard selects
    let now = Utc::now();
    let inventory: Vec<Value> = (0..120)
        .map(|i| {
            let product = &products[i % products.len()];
            let quantity = rng.gen_range(0..80);
            let expiry = if i % 4 == 0 {
                // A quarter of the stock is perishable; some of it inside
                // the 30-day window
                Some(now + Duration::days(rng.gen_range(3..90)))
            } else {
                None
            };
            json!({
                "id": Uuid::new_v4(),
                "product_id": product["id"],
                "location_id": Uuid::new_v4(),
                "quantity": quantity,
                // Same `Z`-suffixed format the client filters with, so
                // string comparison is exact
                "expiry_date": expiry.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
                "products": {
                    "minimum_stock": product["minimum_stock"],
                    "unit_price": product["unit_price"],
                },
            })
        })
        .collect();

    let stock_movements: Vec<Value> = (0..60)
        .map(|_| {
            let ts = now - Duration::hours(rng.gen_range(0..24 * 10));
            let quantity: i64 = rng.gen_range(-40..60);
            json!({
                "id": Uuid::new_v4(),
                "created_at": ts.to_rfc3339_opts(SecondsFormat::Secs, true),
                "quantity": quantity,
            })
        })
        .collect();

    let zones: Vec<Value> = ZONE_NAMES
        .iter()
        .map(|name| {
            let locations: Vec<Value> = (0..rng.gen_range(1..4))
                .map(|_| {
                    let items: Vec<Value> = (0..rng.gen_range(0..6))
                        .map(|_| json!({ "quantity": rng.gen_range(1..50) }))
                        .collect();
                    json!({ "id": Uuid::new_v4(), "inventory": items })
                })
                .collect();
            json!({
                "id": Uuid::new_v4(),
                "name": name,
                "storage_locations": locations,
            })
        })
        .collect();

    tables.insert("warehouses".to_string(), warehouses);
    tables.insert("products".to_string(), products);
    tables.insert("staff".to_string(), staff);
    tables.insert("purchase_orders".to_string(), purchase_orders);
    tables.insert("inventory".to_string(), inventory);
    tables.insert("stock_movements".to_string(), stock_movements);
    tables.insert("zones".to_string(), zones);

    Store { tables }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predicate_forms() {
        assert_eq!(
            parse_predicate("status", "eq.active"),
            Some(Predicate::Eq("status".into(), "active".into()))
        );
        assert_eq!(
            parse_predicate("expiry_date", "not.is.null"),
            Some(Predicate::NotNull("expiry_date".into()))
        );
        assert_eq!(parse_predicate("select", "*"), None);
        assert_eq!(parse_predicate("order", "name.asc"), None);
        assert_eq!(parse_predicate("limit", "0"), None);
    }

    #[test]
    fn test_eq_predicate() {
        let row = json!({ "status": "active" });
        assert!(Predicate::Eq("status".into(), "active".into()).matches(&row));
        assert!(!Predicate::Eq("status".into(), "inactive".into()).matches(&row));
    }

    #[test]
    fn test_column_to_column_lt() {
        let low = json!({ "quantity": 3, "products": { "minimum_stock": 10 } });
        let ok = json!({ "quantity": 30, "products": { "minimum_stock": 10 } });

        let p = Predicate::Lt("quantity".into(), "products.minimum_stock".into());
        assert!(p.matches(&low));
        assert!(!p.matches(&ok));
    }

    #[test]
    fn test_not_null_predicate() {
        let p = Predicate::NotNull("expiry_date".into());
        assert!(p.matches(&json!({ "expiry_date": "2025-04-01T00:00:00Z" })));
        assert!(!p.matches(&json!({ "expiry_date": null })));
        assert!(!p.matches(&json!({})));
    }

    #[test]
    fn test_timestamp_string_ordering() {
        // RFC 3339 compares correctly as strings
        let row = json!({ "created_at": "2025-03-02T08:00:00Z" });
        let p = Predicate::Gte("created_at".into(), "2025-03-01T00:00:00Z".into());
        assert!(p.matches(&row));
        let p = Predicate::Gte("created_at".into(), "2025-03-03T00:00:00Z".into());
        assert!(!p.matches(&row));
    }

    #[test]
    fn test_evaluate_order_and_limit() {
        let rows = vec![
            json!({ "name": "Gamma" }),
            json!({ "name": "Alpha" }),
            json!({ "name": "Beta" }),
        ];

        let (result, total) = evaluate(&rows, &[], Some("name.asc"), Some(2));
        assert_eq!(total, 3);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["name"], "Alpha");
        assert_eq!(result[1]["name"], "Beta");
    }

    #[test]
    fn test_evaluate_count_before_limit() {
        let rows = vec![json!({ "x": 1 }), json!({ "x": 2 })];
        let (result, total) = evaluate(&rows, &[], None, Some(0));
        assert!(result.is_empty());
        assert_eq!(total, 2);
    }

    #[test]
    fn test_seed_tables_present() {
        let store = seed();
        for table in [
            "warehouses",
            "products",
            "staff",
            "purchase_orders",
            "inventory",
            "stock_movements",
            "zones",
        ] {
            assert!(store.table(table).is_some(), "missing table {table}");
        }
        assert_eq!(store.table("zones").unwrap().len(), 5);
    }
}
