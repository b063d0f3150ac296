//! travel-core: Entity model for the travel network graph.
//!
//! This crate provides the types shared by the graph layer and the API:
//! - `City` nodes and `Road` relationships
//! - The `TravelPath` read-model returned by road listings
//! - Input validation and its error type

pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{City, Road, TravelPath};
