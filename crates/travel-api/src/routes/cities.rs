//! City route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use travel_core::City;

use crate::{ApiError, NetworkService};

#[derive(Debug, Deserialize)]
pub struct CityFilter {
    pub filter: Option<String>,
}

pub async fn create_cities(
    State(service): State<NetworkService>,
    Json(cities): Json<Vec<City>>,
) -> Result<StatusCode, ApiError> {
    service.register_cities(&cities).await?;
    Ok(StatusCode::OK)
}

pub async fn find_cities(
    State(service): State<NetworkService>,
    Query(params): Query<CityFilter>,
) -> Result<Json<Vec<City>>, ApiError> {
    let cities = service.search_cities(params.filter.as_deref()).await?;
    Ok(Json(cities))
}
