//! Neo4j schema initialization (constraints).

use neo4rs::Query;

use crate::client::{GraphClient, GraphError};

/// Cypher statements for schema initialization.
const SCHEMA_STATEMENTS: &[&str] = &[
    // One node per city name; also backs the name lookups in road merges.
    "CREATE CONSTRAINT city_name IF NOT EXISTS FOR (c:City) REQUIRE c.name IS UNIQUE",
];

impl GraphClient {
    /// Create the constraints the graph relies on.
    ///
    /// Safe to run multiple times - uses IF NOT EXISTS clauses.
    pub async fn ensure_schema(&self) -> Result<(), GraphError> {
        tracing::info!("Initializing Neo4j schema");

        for statement in SCHEMA_STATEMENTS {
            self.run(Query::new((*statement).to_string())).await?;
        }

        tracing::info!(statements = SCHEMA_STATEMENTS.len(), "Neo4j schema initialized");
        Ok(())
    }
}
