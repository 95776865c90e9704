//! # EcoVision Rust Backend
//!
//! Climate analytics over a catalog of monitoring locations, measured
//! metrics and quality-graded readings.
//!
//! ## Features
//!
//! - **Summary**: per-metric min/max/mean plus a quality-weighted mean and
//!   the quality-grade distribution
//! - **Trends**: first-half/second-half trend direction and rate, outlier
//!   detection and a seasonality flag
//! - **Data access**: repository traits with an in-memory implementation
//!   seeded from JSON
//! - **HTTP API**: REST endpoints served with Axum
//!
//! ## Architecture
//!
//! - [`api`]: Public types re-exported for consumers
//! - [`models`]: Domain entities, quality grades and filters
//! - [`routes`]: Route-specific response types and query parsing
//! - [`services`]: The analytics engine
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

// RepositoryError carries structured context
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod logging;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
