//! Repository implementations.
//!
//! - `local`: in-memory implementation for tests, local development and the
//!   JSON-seeded server
pub mod local;

pub use local::LocalRepository;
