//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod panel;

pub use nav::Nav;
pub use panel::{Panel, ScrollBox};
