//! Road route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use travel_core::{Road, TravelPath};

use crate::{ApiError, NetworkService};

/// `POST /Path?source=..&destination=..&distance=..`
pub async fn create_road(
    State(service): State<NetworkService>,
    Query(road): Query<Road>,
) -> Result<StatusCode, ApiError> {
    service.register_road(&road).await?;
    Ok(StatusCode::OK)
}

pub async fn list_roads(
    State(service): State<NetworkService>,
) -> Result<Json<Vec<TravelPath>>, ApiError> {
    Ok(Json(service.list_roads().await?))
}
