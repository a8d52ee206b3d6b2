//! Direction-agnostic route matching.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ticket::Ticket;

pub const DEFAULT_ORIGIN: &str = "VVO";
pub const DEFAULT_DESTINATION: &str = "TLV";

/// An unordered pair of airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Returns `true` if `ticket` flies this route in either direction.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        is_target_route(ticket, &self.origin, &self.destination)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.origin, self.destination)
    }
}

/// Exact-match test of a ticket against a code pair, in either direction.
pub fn is_target_route(ticket: &Ticket, origin_code: &str, destination_code: &str) -> bool {
    (ticket.origin == origin_code && ticket.destination == destination_code)
        || (ticket.origin == destination_code && ticket.destination == origin_code)
}
