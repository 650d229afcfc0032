//! PostgREST-style query builder
//!
//! Builds the filter-and-select grammar as a plain string, independent of
//! any network machinery, so the full query surface is testable without a
//! browser. Nested-relation expansion is expressed in the select list
//! (`name,storage_locations!inner(inventory!inner(quantity))`).

use std::fmt::Write;

/// Filter operators supported by the backend's query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Lt,
    Gte,
    Lte,
    NotNull,
}

impl FilterOp {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Gte => "gte",
            Self::Lte => "lte",
            Self::NotNull => "not.is",
        }
    }
}

/// A single column predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: String,
}

impl Filter {
    fn to_pair(&self) -> (String, String) {
        match self.op {
            FilterOp::NotNull => (self.column.clone(), "not.is.null".to_string()),
            op => (self.column.clone(), format!("{}.{}", op.keyword(), self.value)),
        }
    }
}

/// A table-scoped read query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: String,
    filters: Vec<Filter>,
    order: Option<String>,
}

impl Query {
    /// Start a query against `table`, selecting all columns
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Replace the select list (columns and nested expansions)
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(column, FilterOp::Eq, value)
    }

    pub fn lt(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(column, FilterOp::Lt, value)
    }

    pub fn gte(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(column, FilterOp::Gte, value)
    }

    pub fn lte(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(column, FilterOp::Lte, value)
    }

    pub fn not_null(mut self, column: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOp::NotNull,
            value: String::new(),
        });
        self
    }

    /// Ascending order on `column`
    pub fn order(mut self, column: impl Into<String>) -> Self {
        self.order = Some(column.into());
        self
    }

    fn filter(mut self, column: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Render the query string after `?`. Filter values are passed through
    /// verbatim; callers supply timestamps in `Z`-suffixed RFC 3339 so no
    /// reserved characters appear.
    pub fn query_string(&self) -> String {
        let mut qs = format!("select={}", self.select);

        for filter in &self.filters {
            let (column, predicate) = filter.to_pair();
            write!(qs, "&{}={}", column, predicate).unwrap();
        }

        if let Some(order) = &self.order {
            write!(qs, "&order={}.asc", order).unwrap();
        }

        qs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_select_all() {
        let q = Query::from("warehouses");
        assert_eq!(q.table(), "warehouses");
        assert_eq!(q.query_string(), "select=*");
    }

    #[test]
    fn test_equality_filter() {
        let q = Query::from("warehouses").eq("status", "active");
        assert_eq!(q.query_string(), "select=*&status=eq.active");
    }

    #[test]
    fn test_order_clause() {
        let q = Query::from("warehouses").order("name");
        assert_eq!(q.query_string(), "select=*&order=name.asc");
    }

    #[test]
    fn test_range_filters() {
        let q = Query::from("stock_movements")
            .select("created_at,quantity")
            .gte("created_at", "2025-02-23T00:00:00Z")
            .order("created_at");
        assert_eq!(
            q.query_string(),
            "select=created_at,quantity&created_at=gte.2025-02-23T00:00:00Z&order=created_at.asc"
        );
    }

    #[test]
    fn test_not_null_with_upper_bound() {
        let q = Query::from("inventory")
            .not_null("expiry_date")
            .lte("expiry_date", "2025-04-01T00:00:00Z");
        assert_eq!(
            q.query_string(),
            "select=*&expiry_date=not.is.null&expiry_date=lte.2025-04-01T00:00:00Z"
        );
    }

    #[test]
    fn test_nested_expansion_select() {
        let q = Query::from("zones").select("name,storage_locations!inner(inventory!inner(quantity))");
        assert_eq!(
            q.query_string(),
            "select=name,storage_locations!inner(inventory!inner(quantity))"
        );
    }

    #[test]
    fn test_column_to_column_threshold() {
        let q = Query::from("inventory")
            .select("product_id,quantity,products!inner(minimum_stock)")
            .lt("quantity", "products.minimum_stock");
        assert_eq!(
            q.query_string(),
            "select=product_id,quantity,products!inner(minimum_stock)&quantity=lt.products.minimum_stock"
        );
    }
}
