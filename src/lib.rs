pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod route;
pub mod stats;
pub mod ticket;
