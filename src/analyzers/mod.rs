//! Route aggregation.
//!
//! Filters the loaded tickets down to one route, groups them by carrier to
//! find the shortest flight each carrier offers, and collects the prices that
//! feed the statistics in [`crate::stats`].

pub mod aggregate;
pub mod analyzer;
pub mod types;
