//! Read operations and row mapping for the travel graph.

use neo4rs::{query, Row};

use travel_core::{City, TravelPath};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── City Lookups ─────────────────────────────────────────────

    /// Find every city whose name contains `filter` (case-sensitive).
    ///
    /// An empty filter matches all cities. Rows come back in whatever order
    /// Neo4j produces them.
    pub async fn find_cities(&self, filter: &str) -> Result<Vec<City>, GraphError> {
        let q = query(
            "MATCH (city:City)
             WHERE city.name CONTAINS $filter
             RETURN
               city.name AS name,
               city.population AS population,
               city.country AS country,
               city.livingCost AS livingCost,
               city.numberOfAirports AS numberOfAirports,
               city.localLanguage AS localLanguage,
               city.peakTravelTime AS peakTravelTime,
               city.transportation AS transportation",
        )
        .param("filter", filter.to_string());

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in &rows {
            results.push(city_from_row(row)?);
        }
        Ok(results)
    }

    /// Whether at least one City node carries `name`.
    pub async fn city_exists(&self, name: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (city:City {name: $name})
             RETURN count(city) AS cnt",
        )
        .param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(read_count(&row, "cnt")? > 0),
            None => Ok(false),
        }
    }

    // ── Road Listing ─────────────────────────────────────────────

    /// List every road as a (source, distance, destination) triple.
    pub async fn list_roads(&self) -> Result<Vec<TravelPath>, GraphError> {
        let q = query(
            "MATCH (source:City)-[road:Road]->(destination:City)
             RETURN source.name AS source, road.distance AS distance, destination.name AS destination",
        );

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in &rows {
            results.push(TravelPath {
                source: read_string(row, "source")?,
                distance: narrow_i32("distance", read_int(row, "distance")?)?,
                destination: read_string(row, "destination")?,
            });
        }
        Ok(results)
    }
}

/// Rebuild a City from a `find_cities` row.
fn city_from_row(row: &Row) -> Result<City, GraphError> {
    Ok(City {
        name: read_string(row, "name")?,
        population: read_int(row, "population")?,
        country: read_string(row, "country")?,
        living_cost: read_string(row, "livingCost")?,
        number_of_airports: narrow_i32("numberOfAirports", read_int(row, "numberOfAirports")?)?,
        local_language: read_string(row, "localLanguage")?,
        peak_travel_time: read_string(row, "peakTravelTime")?,
        transportation: read_string(row, "transportation")?,
    })
}

fn read_string(row: &Row, column: &str) -> Result<String, GraphError> {
    row.get::<String>(column).map_err(|e| GraphError::DataIntegrity {
        column: column.to_string(),
        reason: format!("expected a string: {e}"),
    })
}

/// Read an integer column. Values written as strings by other clients are
/// parsed; anything else is a data-integrity failure, never a default.
fn read_int(row: &Row, column: &str) -> Result<i64, GraphError> {
    if let Ok(value) = row.get::<i64>(column) {
        return Ok(value);
    }
    match row.get::<String>(column) {
        Ok(raw) => parse_int(column, &raw),
        Err(e) => Err(GraphError::DataIntegrity {
            column: column.to_string(),
            reason: format!("expected an integer: {e}"),
        }),
    }
}

/// Read an aggregate count column. A missing or mistyped count is an error,
/// never zero.
pub(crate) fn read_count(row: &Row, column: &str) -> Result<i64, GraphError> {
    decoded_count(column, row.get::<i64>(column))
}

fn decoded_count<E: std::fmt::Display>(
    column: &str,
    decoded: Result<i64, E>,
) -> Result<i64, GraphError> {
    decoded.map_err(|e| GraphError::DataIntegrity {
        column: column.to_string(),
        reason: format!("expected a count: {e}"),
    })
}

pub(crate) fn parse_int(column: &str, raw: &str) -> Result<i64, GraphError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| GraphError::DataIntegrity {
            column: column.to_string(),
            reason: format!("{raw:?} is not an integer: {e}"),
        })
}

pub(crate) fn narrow_i32(column: &str, value: i64) -> Result<i32, GraphError> {
    i32::try_from(value).map_err(|_| GraphError::DataIntegrity {
        column: column.to_string(),
        reason: format!("{value} does not fit in a 32-bit integer"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_accepts_stored_strings() {
        assert_eq!(parse_int("population", "545000").unwrap(), 545_000);
        assert_eq!(parse_int("population", " 42 ").unwrap(), 42);
        assert_eq!(parse_int("population", "-7").unwrap(), -7);
    }

    #[test]
    fn parse_int_surfaces_garbage() {
        let err = parse_int("population", "lots").unwrap_err();
        match err {
            GraphError::DataIntegrity { column, reason } => {
                assert_eq!(column, "population");
                assert!(reason.contains("\"lots\""));
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }

        assert!(parse_int("population", "").is_err());
        assert!(parse_int("population", "1.5").is_err());
    }

    #[test]
    fn undecodable_count_is_not_zero() {
        assert_eq!(decoded_count::<String>("merged", Ok(1)).unwrap(), 1);

        let err = decoded_count("merged", Err("column not found")).unwrap_err();
        match err {
            GraphError::DataIntegrity { column, reason } => {
                assert_eq!(column, "merged");
                assert!(reason.contains("column not found"));
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn narrow_i32_rejects_overflow() {
        assert_eq!(narrow_i32("distance", 313).unwrap(), 313);
        assert_eq!(narrow_i32("distance", i64::from(i32::MAX)).unwrap(), i32::MAX);
        assert!(matches!(
            narrow_i32("distance", i64::from(i32::MAX) + 1),
            Err(GraphError::DataIntegrity { .. })
        ));
    }
}
