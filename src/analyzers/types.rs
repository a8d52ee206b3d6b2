//! Data types produced by the aggregation pipeline.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::route::Route;

/// Reductions over the tickets matching one route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteAggregate {
    /// Shortest flight per carrier, in minutes.
    pub min_duration_by_carrier: BTreeMap<String, i64>,
    /// Every matching price, duplicates kept.
    pub prices: Vec<i32>,
}

/// Complete result for one run, rendered by [`crate::output`].
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub route: Route,
    pub total_tickets: usize,
    pub matched_tickets: usize,
    pub min_duration_by_carrier: BTreeMap<String, i64>,
    pub mean_price: f64,
    pub median_price: f64,
    pub mean_median_diff: Decimal,
}
