//! Pages
//!
//! Top-level page components for each route.

pub mod logs;
pub mod rules;
pub mod statistics;

pub use logs::LogView;
pub use rules::RuleView;
pub use statistics::StatisticsView;
