//! Neo4j connection management and shared graph client.

use std::future::Future;
use std::time::Duration;

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Neo4j call exceeded the {seconds}s deadline")]
    Timeout { seconds: u64 },

    #[error("{label} not found: {name}")]
    NotFound { label: String, name: String },

    #[error("Stored value for `{column}` is unreadable: {reason}")]
    DataIntegrity { column: String, reason: String },
}

/// Configuration for connecting to Neo4j.
///
/// Deserializes from the `[neo4j]` config section; missing keys fall back
/// to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
    /// Deadline applied to every statement and every batch transaction.
    /// `0` disables the deadline.
    pub query_timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "travel-dev".to_string(),
            max_connections: 16,
            fetch_size: 256,
            query_timeout_secs: 10,
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Passed explicitly to whoever needs the store. Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    query_timeout: Option<Duration>,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph,
            query_timeout: deadline_from_secs(config.query_timeout_secs),
        })
    }

    /// Execute a write-only query (CREATE, MERGE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.with_deadline(async {
            self.graph.run(query).await?;
            Ok::<_, GraphError>(())
        })
        .await
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        self.with_deadline(async {
            let mut stream = self.graph.execute(query).await?;
            let mut rows = Vec::new();
            while let Some(row) = stream.next().await? {
                rows.push(row);
            }
            Ok::<_, GraphError>(rows)
        })
        .await
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        self.with_deadline(async {
            let mut stream = self.graph.execute(query).await?;
            Ok::<_, GraphError>(stream.next().await?)
        })
        .await
    }

    /// Begin a transaction. Callers run their statements under
    /// [`GraphClient::with_deadline`] themselves.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }

    /// Run `fut` under the configured query deadline.
    pub async fn with_deadline<T, F>(&self, fut: F) -> Result<T, GraphError>
    where
        F: Future<Output = Result<T, GraphError>>,
    {
        with_deadline(self.query_timeout, fut).await
    }
}

/// Map `query_timeout_secs` to a deadline; zero means none.
pub fn deadline_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Run `fut`, failing with [`GraphError::Timeout`] once `deadline` passes.
///
/// A timed-out future is dropped, which hands its pooled connection back.
pub async fn with_deadline<T, F>(deadline: Option<Duration>, fut: F) -> Result<T, GraphError>
where
    F: Future<Output = Result<T, GraphError>>,
{
    let Some(deadline) = deadline else {
        return fut.await;
    };
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_secs = deadline.as_secs(), "Neo4j call timed out");
            Err(GraphError::Timeout {
                seconds: deadline.as_secs(),
            })
        }
    }
}
