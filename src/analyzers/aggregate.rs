use std::collections::BTreeMap;

use crate::analyzers::types::RouteAggregate;
use crate::route::Route;
use crate::ticket::Ticket;

/// Shortest flight duration per carrier, in minutes.
///
/// A carrier only gets an entry once one of its tickets is seen, so every
/// entry holds a real minimum. Empty input gives an empty map.
pub fn min_duration_by_carrier<'a>(
    tickets: impl IntoIterator<Item = &'a Ticket>,
) -> BTreeMap<String, i64> {
    let mut minimums: BTreeMap<String, i64> = BTreeMap::new();

    for ticket in tickets {
        let minutes = ticket.flight_duration_minutes();
        minimums
            .entry(ticket.carrier.clone())
            .and_modify(|min| *min = (*min).min(minutes))
            .or_insert(minutes);
    }

    minimums
}

/// All ticket prices, in input order.
pub fn collect_prices<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<i32> {
    tickets.into_iter().map(|t| t.price).collect()
}

/// Filters `tickets` to `route` and runs both reductions over the result.
pub fn aggregate_route(tickets: &[Ticket], route: &Route) -> RouteAggregate {
    let matching: Vec<&Ticket> = tickets.iter().filter(|t| route.matches(t)).collect();

    RouteAggregate {
        min_duration_by_carrier: min_duration_by_carrier(matching.iter().copied()),
        prices: collect_prices(matching.iter().copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};

    #[test]
    fn test_min_duration_per_carrier() {
        let tickets = vec![
            ticket("VVO", "TLV", "A", 120, 100),
            ticket("VVO", "TLV", "A", 90, 100),
            ticket("TLV", "VVO", "B", 200, 100),
        ];

        let minimums = min_duration_by_carrier(&tickets);

        assert_eq!(minimums.len(), 2);
        assert_eq!(minimums["A"], 90);
        assert_eq!(minimums["B"], 200);
    }

    #[test]
    fn test_min_duration_empty_input() {
        assert!(min_duration_by_carrier(&Vec::<Ticket>::new()).is_empty());
    }

    #[test]
    fn test_collect_prices_keeps_duplicates() {
        let tickets = vec![
            ticket("VVO", "TLV", "A", 60, 300),
            ticket("VVO", "TLV", "B", 60, 300),
            ticket("VVO", "TLV", "A", 60, 150),
        ];

        assert_eq!(collect_prices(&tickets), vec![300, 300, 150]);
    }

    #[test]
    fn test_aggregate_route_filters_other_routes() {
        let tickets = vec![
            ticket("VVO", "TLV", "S7", 600, 500),
            ticket("TLV", "VVO", "S7", 510, 700),
            ticket("VVO", "DXB", "FZ", 100, 300),
        ];

        let aggregate = aggregate_route(&tickets, &Route::default());

        assert_eq!(aggregate.min_duration_by_carrier.len(), 1);
        assert_eq!(aggregate.min_duration_by_carrier["S7"], 510);
        assert_eq!(aggregate.prices, vec![500, 700]);
    }

    #[test]
    fn test_aggregate_route_no_matches() {
        let tickets = vec![ticket("LED", "DXB", "FZ", 100, 300)];

        let aggregate = aggregate_route(&tickets, &Route::default());

        assert_eq!(aggregate, RouteAggregate::default());
    }

    // Helper functions for tests
    fn ticket(origin: &str, destination: &str, carrier: &str, minutes: i64, price: i32) -> Ticket {
        let departure = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        let arrival = departure + Duration::minutes(minutes);

        Ticket {
            origin: origin.to_string(),
            origin_name: String::new(),
            destination: destination.to_string(),
            destination_name: String::new(),
            departure_date: departure.date(),
            departure_time: departure.time(),
            arrival_date: arrival.date(),
            arrival_time: arrival.time(),
            carrier: carrier.to_string(),
            stops: 0,
            price,
        }
    }
}
