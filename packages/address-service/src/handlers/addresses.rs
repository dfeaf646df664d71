use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    error::AddressError,
    models::{Address, NewAddress, SearchParams},
    services::address::AddressService,
};

/// List addresses, or only those within `distance` km of (`lat`, `long`)
/// when all three query parameters are given.
pub async fn list_addresses(
    State(service): State<Arc<AddressService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Address>>, AddressError> {
    debug!("Listing addresses with {:?}", params);
    let query = params.into_query()?;
    let addresses = service.search(query).await?;
    Ok(Json(addresses))
}

pub async fn create_address(
    State(service): State<Arc<AddressService>>,
    Json(request): Json<NewAddress>,
) -> Result<Json<Address>, AddressError> {
    let address = service.create(request).await?;
    Ok(Json(address))
}

pub async fn update_address(
    State(service): State<Arc<AddressService>>,
    Path(id): Path<i64>,
    Json(request): Json<NewAddress>,
) -> Result<Json<Address>, AddressError> {
    let address = service.update(id, request).await?;
    Ok(Json(address))
}

pub async fn delete_address(
    State(service): State<Arc<AddressService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AddressError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
