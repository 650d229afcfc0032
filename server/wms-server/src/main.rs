//! Mock warehouse backend for demo/development
//!
//! Serves the PostgREST-style read surface the dashboard consumes:
//! `GET /rest/v1/{table}` with filter/order/limit query parameters and
//! `Prefer: count=exact` answered via the `Content-Range` header.

mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use store::{evaluate, parse_predicate, Predicate, Store};

const BIND_ADDR: &str = "127.0.0.1:3001";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let store = Arc::new(store::seed());
    tracing::info!(tables = ?store.table_names(), "mock store seeded");

    let app = Router::new()
        .route("/rest/v1/:table", get(query_table))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .expect("bind mock server address");
    tracing::info!("mock backend listening on http://{BIND_ADDR}");

    axum::serve(listener, app).await.expect("serve mock backend");
}

/// Parsed pieces of a table query
struct TableQuery {
    predicates: Vec<Predicate>,
    order: Option<String>,
    limit: Option<usize>,
}

fn parse_query(uri: &Uri) -> TableQuery {
    let mut predicates = Vec::new();
    let mut order = None;
    let mut limit = None;

    for pair in uri.query().unwrap_or_default().split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };

        match key {
            "order" => order = Some(value.to_string()),
            "limit" => limit = value.parse().ok(),
            _ => {
                if let Some(predicate) = parse_predicate(key, value) {
                    predicates.push(predicate);
                }
            }
        }
    }

    TableQuery {
        predicates,
        order,
        limit,
    }
}

fn wants_exact_count(headers: &HeaderMap) -> bool {
    headers
        .get("prefer")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("count=exact"))
}

async fn query_table(
    State(store): State<Arc<Store>>,
    Path(table): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let Some(rows) = store.table(&table) else {
        tracing::warn!(%table, "query against unknown table");
        return (StatusCode::NOT_FOUND, format!("unknown table: {table}")).into_response();
    };

    let query = parse_query(&uri);
    let (result, total) = evaluate(rows, &query.predicates, query.order.as_deref(), query.limit);

    tracing::debug!(%table, matched = total, returned = result.len(), "query evaluated");

    let mut response = Json(result).into_response();
    if wants_exact_count(&headers) {
        if let Ok(range) = HeaderValue::from_str(&format!("*/{total}")) {
            response.headers_mut().insert("content-range", range);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_splits_concerns() {
        let uri: Uri = "/rest/v1/warehouses?select=*&status=eq.active&order=name.asc&limit=0"
            .parse()
            .unwrap();
        let query = parse_query(&uri);

        assert_eq!(query.predicates.len(), 1);
        assert_eq!(query.order.as_deref(), Some("name.asc"));
        assert_eq!(query.limit, Some(0));
    }

    #[test]
    fn test_parse_query_duplicate_columns() {
        let uri: Uri =
            "/rest/v1/inventory?select=*&expiry_date=not.is.null&expiry_date=lte.2025-04-01T00:00:00Z"
                .parse()
                .unwrap();
        let query = parse_query(&uri);
        assert_eq!(query.predicates.len(), 2);
    }

    #[test]
    fn test_wants_exact_count() {
        let mut headers = HeaderMap::new();
        assert!(!wants_exact_count(&headers));

        headers.insert("prefer", HeaderValue::from_static("count=exact"));
        assert!(wants_exact_count(&headers));
    }
}
