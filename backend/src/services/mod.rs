//! Service layer for climate analytics.
//!
//! This module sits between the repository and the HTTP handlers. The
//! `compute_*` functions are pure and operate on already-fetched readings;
//! the async `get_*` functions fetch through a repository first.

pub mod grouping;
pub mod summary;
pub mod trends;

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;


pub use summary::{compute_summary, get_summary_data};
pub use trends::{compute_trends, get_trends_data};
