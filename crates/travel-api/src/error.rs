//! Error types for the travel-api crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use travel_core::ValidationError;
use travel_graph::GraphError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Graph(GraphError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Graph(GraphError::DataIntegrity { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Graph(GraphError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            Self::Graph(GraphError::Connection(_) | GraphError::Query(_)) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
