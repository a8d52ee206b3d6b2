use tracing::{debug, info, warn};

use crate::analyzers::aggregate::aggregate_route;
use crate::analyzers::types::RouteReport;
use crate::route::Route;
use crate::stats::{mean, mean_median_diff, median};
use crate::ticket::TicketList;

/// Runs the filter, aggregation and statistics stages for one route.
#[tracing::instrument(skip_all, fields(route = %route, total = list.tickets.len()))]
pub fn analyze(list: &TicketList, route: &Route) -> RouteReport {
    let aggregate = aggregate_route(&list.tickets, route);
    let matched_tickets = aggregate.prices.len();

    if matched_tickets == 0 {
        warn!("No tickets found for route");
    } else {
        debug!(
            matched = matched_tickets,
            carriers = aggregate.min_duration_by_carrier.len(),
            "Route tickets aggregated"
        );
    }

    let report = RouteReport {
        route: route.clone(),
        total_tickets: list.tickets.len(),
        matched_tickets,
        mean_price: mean(&aggregate.prices),
        median_price: median(&aggregate.prices),
        mean_median_diff: mean_median_diff(&aggregate.prices),
        min_duration_by_carrier: aggregate.min_duration_by_carrier,
    };

    info!(
        matched = report.matched_tickets,
        mean = report.mean_price,
        median = report.median_price,
        "Route statistics computed"
    );

    report
}
