//! Write operations for the travel graph.
//!
//! Cities are upserted with MERGE on `name`, so re-registering a city
//! overwrites its attributes instead of adding a second node. Roads are
//! merged per (source, destination, distance).

use neo4rs::{query, Query};

use travel_core::City;

use crate::client::{GraphClient, GraphError};
use crate::queries::read_count;

impl GraphClient {
    // ── City Upserts ─────────────────────────────────────────────

    /// Upsert a single City node.
    pub async fn create_city(&self, city: &City) -> Result<(), GraphError> {
        self.run(city_upsert(city)).await?;
        tracing::debug!(city = %city.name, "Upserted city");
        Ok(())
    }

    /// Upsert multiple cities in a single transaction.
    ///
    /// Either every city is written or none is: the transaction is rolled
    /// back on the first failing statement.
    pub async fn create_cities(&self, cities: &[City]) -> Result<(), GraphError> {
        if cities.is_empty() {
            return Ok(());
        }

        self.with_deadline(async {
            let mut txn = self.start_txn().await?;

            for city in cities {
                if let Err(e) = txn.run(city_upsert(city)).await {
                    tracing::warn!(city = %city.name, error = %e, "City upsert failed, rolling back batch");
                    if let Err(rollback_err) = txn.rollback().await {
                        tracing::warn!(error = %rollback_err, "Rollback failed");
                    }
                    return Err(GraphError::Query(e));
                }
            }

            txn.commit().await?;
            Ok::<_, GraphError>(())
        })
        .await?;

        tracing::info!(count = cities.len(), "Upserted city batch");
        Ok(())
    }

    // ── Road Merges ──────────────────────────────────────────────

    /// Merge a directed road between two existing cities.
    ///
    /// Fails with [`GraphError::NotFound`] naming the first missing
    /// endpoint; nothing is written in that case.
    pub async fn create_road(
        &self,
        source: &str,
        destination: &str,
        distance: i32,
    ) -> Result<(), GraphError> {
        let q = query(
            "MATCH (source:City {name: $source})
             MATCH (destination:City {name: $destination})
             MERGE (source)-[road:Road {distance: $distance}]->(destination)
             RETURN count(road) AS merged",
        )
        .param("source", source.to_string())
        .param("destination", destination.to_string())
        .param("distance", i64::from(distance));

        let merged = match self.query_one(q).await? {
            Some(row) => read_count(&row, "merged")?,
            None => 0,
        };

        if merged > 0 {
            tracing::debug!(source, destination, distance, "Merged road");
            return Ok(());
        }

        let missing = if self.city_exists(source).await? {
            destination
        } else {
            source
        };
        Err(GraphError::NotFound {
            label: "City".to_string(),
            name: missing.to_string(),
        })
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Build the MERGE statement for one city.
fn city_upsert(city: &City) -> Query {
    query(
        "MERGE (city:City {name: $name})
         SET city.population = $population,
             city.country = $country,
             city.livingCost = $livingCost,
             city.numberOfAirports = $numberOfAirports,
             city.localLanguage = $localLanguage,
             city.peakTravelTime = $peakTravelTime,
             city.transportation = $transportation",
    )
    .param("name", city.name.clone())
    .param("population", city.population)
    .param("country", city.country.clone())
    .param("livingCost", city.living_cost.clone())
    .param("numberOfAirports", i64::from(city.number_of_airports))
    .param("localLanguage", city.local_language.clone())
    .param("peakTravelTime", city.peak_travel_time.clone())
    .param("transportation", city.transportation.clone())
}
