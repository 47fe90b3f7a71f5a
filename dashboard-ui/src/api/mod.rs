//! API Access
//!
//! Endpoint resolution and the typed fetches the views make.

pub mod client;
pub mod endpoint;

pub use client::{fetch_logs, fetch_rules, fetch_stats, FetchError, LogRecord, Statistics};
pub use endpoint::{Endpoint, EndpointStrategy};
