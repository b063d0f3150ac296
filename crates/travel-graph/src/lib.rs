//! Travel Graph — Neo4j client for the travel network.
//!
//! This crate is the only code that talks to Neo4j. Cities are `:City`
//! nodes keyed by `name`; roads are `:Road` relationships carrying a
//! `distance`. Every statement runs under the client's query deadline.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::TravelStore;
