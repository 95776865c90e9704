pub mod climate;
pub mod filters;
pub mod summary;
pub mod trends;
