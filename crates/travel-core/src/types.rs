//! Core domain types for the travel network graph.
//!
//! Cities are stored as `:City` nodes and roads as directed `:Road`
//! relationships. Field names serialize in camelCase, matching both the
//! JSON wire format and the stored node property names.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ── Nodes ─────────────────────────────────────────────────────────

/// A city in the travel network. `name` identifies the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub population: i64,
    pub country: String,
    /// Free-form cost-of-living descriptor (e.g. "high", "$$").
    pub living_cost: String,
    pub number_of_airports: i32,
    pub local_language: String,
    pub peak_travel_time: String,
    pub transportation: String,
}

impl City {
    /// Check the fields the graph layer relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("name", &self.name)?;
        require_non_negative("population", self.population)?;
        require_non_negative("numberOfAirports", i64::from(self.number_of_airports))?;
        Ok(())
    }
}

// ── Relationships ─────────────────────────────────────────────────

/// A directed road between two cities, identified by their names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Road {
    pub source: String,
    pub destination: String,
    pub distance: i32,
}

impl Road {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, distance: i32) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("source", &self.source)?;
        require_non_blank("destination", &self.destination)?;
        require_non_negative("distance", i64::from(self.distance))?;
        Ok(())
    }
}

/// A road as returned by the road listing: endpoint names plus distance.
///
/// This is a query result shape, never written back to the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TravelPath {
    pub source: String,
    pub distance: i32,
    pub destination: String,
}

impl From<Road> for TravelPath {
    fn from(road: Road) -> Self {
        Self {
            source: road.source,
            distance: road.distance,
            destination: road.destination,
        }
    }
}

fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
