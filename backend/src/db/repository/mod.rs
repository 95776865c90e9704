//! Repository trait definitions for data access.
//!
//! - [`error`]: Error types for repository operations
//! - [`catalog`]: Locations and metrics
//! - [`reading`]: Climate readings and their filtered queries
//!
//! Functions that need both capabilities should take the [`FullRepository`]
//! bound:
//!
//! ```ignore
//! async fn summarize<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let metrics = repo.list_metrics().await?;
//!     let readings = repo.fetch_readings(&ReadingFilter::new(), ReadingOrder::Unordered).await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod reading;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use catalog::CatalogRepository;
pub use reading::ReadingRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: CatalogRepository + ReadingRepository {}

// Blanket implementation: anything implementing both traits is a FullRepository
impl<T> FullRepository for T where T: CatalogRepository + ReadingRepository {}
