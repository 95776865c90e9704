//! Domain model shared by the data-access layer, the analytics engine and
//! the HTTP API.

pub mod climate;
pub mod filter;
pub mod macros;
pub mod quality;
pub mod reading;

pub use climate::*;
pub use filter::*;
pub use quality::*;
pub use reading::*;
