//! The network operations, independent of any transport.

use std::sync::Arc;

use travel_core::{City, Road, TravelPath};
use travel_graph::TravelStore;

use crate::error::ApiError;

/// Adapts validated requests to store calls.
///
/// Holds no state of its own; every call goes to the store it was built
/// with. Clone is cheap.
#[derive(Clone)]
pub struct NetworkService {
    store: Arc<dyn TravelStore>,
}

impl NetworkService {
    pub fn new(store: Arc<dyn TravelStore>) -> Self {
        Self { store }
    }

    /// Register a batch of cities.
    ///
    /// Every city is validated before the store is touched, so one bad
    /// entry rejects the whole batch.
    pub async fn register_cities(&self, cities: &[City]) -> Result<(), ApiError> {
        for city in cities {
            city.validate()?;
        }
        match cities {
            [city] => self.store.create_city(city).await?,
            _ => self.store.create_cities(cities).await?,
        }
        tracing::info!(count = cities.len(), "Registered cities");
        Ok(())
    }

    /// Cities whose name contains `filter`; no filter matches everything.
    pub async fn search_cities(&self, filter: Option<&str>) -> Result<Vec<City>, ApiError> {
        let filter = filter.unwrap_or_default();
        let cities = self.store.find_cities(filter).await?;
        tracing::debug!(filter, matched = cities.len(), "Searched cities");
        Ok(cities)
    }

    pub async fn register_road(&self, road: &Road) -> Result<(), ApiError> {
        road.validate()?;
        self.store.create_road(road).await?;
        tracing::info!(
            source = %road.source,
            destination = %road.destination,
            distance = road.distance,
            "Registered road"
        );
        Ok(())
    }

    pub async fn list_roads(&self) -> Result<Vec<TravelPath>, ApiError> {
        Ok(self.store.list_roads().await?)
    }
}
