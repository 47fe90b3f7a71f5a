//! Suricata Data Sources
//!
//! Read-only access to the files Suricata and the rule generator write:
//!
//! - **eve**: the EVE log, one JSON event per line
//! - **rules**: the generated rules file
//! - **stats**: aggregation of EVE events into dashboard statistics
//!
//! Files are re-read on every call; nothing is cached.

pub mod error;
pub mod eve;
pub mod rules;
pub mod stats;

pub use error::{SourceError, SourceResult};
pub use eve::{parse_events, read_events};
pub use rules::{parse_rules, read_rules};
pub use stats::{aggregate, is_anomaly, UNKNOWN_SOURCE};
