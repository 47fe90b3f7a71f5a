//! State Management
//!
//! Fetch outcomes scoped to the view that requested them.

pub mod fetch;

pub use fetch::{use_fetch, FetchState};
