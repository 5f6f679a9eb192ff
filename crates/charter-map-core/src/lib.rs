//! Charter map core library: search, filter, and sort engine behind the
//! stakeholder map dashboard.
//!
//! The engine itself is a pure function over charter summaries
//! (`query::engine::filter_and_sort`).  Around it sit the host page state
//! (`host`), an in-memory listing cache (`query::planner`), and, with the
//! `python` feature, a `_charter_map_core` extension module exposing the
//! engine to an embedding host through JSON payloads.

pub mod errors;
pub mod host;
pub mod models;
pub mod query;
pub mod settings;

#[cfg(feature = "python")]
pub mod python;

pub use query::engine::filter_and_sort;
