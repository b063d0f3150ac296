//! The store seam the network service is written against.

use async_trait::async_trait;

use travel_core::{City, Road, TravelPath};

use crate::client::{GraphClient, GraphError};

/// Persistent owner of cities and roads.
///
/// [`GraphClient`] is the production implementation; anything else
/// (an in-memory double, a different backend) must keep the same
/// semantics: cities are unique by name, roads need both endpoints and are
/// merged per (source, destination, distance), batches are all-or-nothing.
#[async_trait]
pub trait TravelStore: Send + Sync {
    async fn create_city(&self, city: &City) -> Result<(), GraphError>;

    async fn create_cities(&self, cities: &[City]) -> Result<(), GraphError>;

    async fn find_cities(&self, filter: &str) -> Result<Vec<City>, GraphError>;

    async fn create_road(&self, road: &Road) -> Result<(), GraphError>;

    async fn list_roads(&self) -> Result<Vec<TravelPath>, GraphError>;
}

#[async_trait]
impl TravelStore for GraphClient {
    async fn create_city(&self, city: &City) -> Result<(), GraphError> {
        GraphClient::create_city(self, city).await
    }

    async fn create_cities(&self, cities: &[City]) -> Result<(), GraphError> {
        GraphClient::create_cities(self, cities).await
    }

    async fn find_cities(&self, filter: &str) -> Result<Vec<City>, GraphError> {
        GraphClient::find_cities(self, filter).await
    }

    async fn create_road(&self, road: &Road) -> Result<(), GraphError> {
        GraphClient::create_road(self, &road.source, &road.destination, road.distance).await
    }

    async fn list_roads(&self) -> Result<Vec<TravelPath>, GraphError> {
        GraphClient::list_roads(self).await
    }
}
