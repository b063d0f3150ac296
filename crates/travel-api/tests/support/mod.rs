//! In-memory `TravelStore` for exercising the service without Neo4j.
//!
//! Mirrors the graph semantics: cities upsert by name, roads need both
//! endpoints and merge per (source, destination, distance), batches are
//! all-or-nothing.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use travel_api::NetworkService;
use travel_core::{City, Road, TravelPath};
use travel_graph::{GraphError, TravelStore};

#[derive(Default)]
pub struct MemoryStore {
    cities: Mutex<Vec<City>>,
    roads: Mutex<Vec<TravelPath>>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Make every subsequent call fail as if Neo4j were unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Number of store calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn city_count(&self) -> usize {
        self.cities.lock().unwrap().len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.lock().unwrap().len()
    }

    fn enter(&self) -> Result<(), GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(GraphError::Connection("connection refused".to_string()));
        }
        Ok(())
    }

    fn upsert(cities: &mut Vec<City>, city: &City) {
        match cities.iter_mut().find(|c| c.name == city.name) {
            Some(existing) => *existing = city.clone(),
            None => cities.push(city.clone()),
        }
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn create_city(&self, city: &City) -> Result<(), GraphError> {
        self.enter()?;
        Self::upsert(&mut self.cities.lock().unwrap(), city);
        Ok(())
    }

    async fn create_cities(&self, cities: &[City]) -> Result<(), GraphError> {
        self.enter()?;
        let mut stored = self.cities.lock().unwrap();
        for city in cities {
            Self::upsert(&mut stored, city);
        }
        Ok(())
    }

    async fn find_cities(&self, filter: &str) -> Result<Vec<City>, GraphError> {
        self.enter()?;
        Ok(self
            .cities
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.contains(filter))
            .cloned()
            .collect())
    }

    async fn create_road(&self, road: &Road) -> Result<(), GraphError> {
        self.enter()?;
        {
            let cities = self.cities.lock().unwrap();
            for name in [&road.source, &road.destination] {
                if !cities.iter().any(|c| &c.name == name) {
                    return Err(GraphError::NotFound {
                        label: "City".to_string(),
                        name: name.clone(),
                    });
                }
            }
        }
        let path = TravelPath::from(road.clone());
        let mut roads = self.roads.lock().unwrap();
        if !roads.contains(&path) {
            roads.push(path);
        }
        Ok(())
    }

    async fn list_roads(&self) -> Result<Vec<TravelPath>, GraphError> {
        self.enter()?;
        Ok(self.roads.lock().unwrap().clone())
    }
}

pub fn service() -> (NetworkService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (NetworkService::new(store.clone()), store)
}

pub fn city(name: &str) -> City {
    City {
        name: name.to_string(),
        population: 100_000,
        country: "Portugal".to_string(),
        living_cost: "medium".to_string(),
        number_of_airports: 1,
        local_language: "Portuguese".to_string(),
        peak_travel_time: "Summer".to_string(),
        transportation: "train".to_string(),
    }
}
