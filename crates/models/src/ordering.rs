//! Text ordering shared by both storage backends: case-folded first, then
//! exact bytes. PostgreSQL gets `COLLATE "C"` so the server locale does not
//! change the result.
use std::cmp::Ordering;

use sea_orm::{sea_query::Expr, Order, QueryOrder};

pub fn compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Append `ORDER BY LOWER(t.c) COLLATE "C", t.c COLLATE "C"` to `query`.
pub fn order_case_folded<Q: QueryOrder>(query: Q, table: &str, column: &str) -> Q {
    query
        .order_by(Expr::cust(format!(r#"LOWER("{table}"."{column}") COLLATE "C""#)), Order::Asc)
        .order_by(Expr::cust(format!(r#""{table}"."{column}" COLLATE "C""#)), Order::Asc)
}
