use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    error::AddressError,
    libraries::coordinate_check::{validate_coordinate, validate_distance},
    models::{Address, AddressQuery, Coordinate, NewAddress},
    services::{location::filter_in_radius, store::AddressRepository},
};

/// Address operations on top of an [`AddressRepository`].
///
/// Validation runs before the store is touched. The duplicate lookup done
/// here is only a pre-check; the store's own `DuplicateCoordinate` is final.
#[derive(Clone)]
pub struct AddressService {
    store: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(store: Arc<dyn AddressRepository>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Address>, AddressError> {
        let addresses = self.store.list_all().await?;
        debug!("Listing {} addresses", addresses.len());
        Ok(addresses)
    }

    /// All addresses within `distance` km of `center`, in storage order
    pub async fn radius_query(
        &self,
        center: Coordinate,
        distance: f64,
    ) -> Result<Vec<Address>, AddressError> {
        validate_coordinate(&center)?;
        validate_distance(distance)?;

        let addresses = self.store.list_all().await?;
        let scanned = addresses.len();
        let matches = filter_in_radius(addresses, &center, distance);

        debug!(
            "Radius query ({}, {}) within {}km: {} of {} addresses match",
            center.latitude,
            center.longitude,
            distance,
            matches.len(),
            scanned
        );

        Ok(matches)
    }

    pub async fn search(&self, query: AddressQuery) -> Result<Vec<Address>, AddressError> {
        match query {
            AddressQuery::All => self.list().await,
            AddressQuery::Radius { center, distance } => self.radius_query(center, distance).await,
        }
    }

    pub async fn create(&self, address: NewAddress) -> Result<Address, AddressError> {
        let coordinate = address.coordinate();
        validate_coordinate(&coordinate)?;

        if self.store.find_by_coordinate(&coordinate).await?.is_some() {
            warn!(
                "Rejected address '{}': ({}, {}) is taken",
                address.name, coordinate.latitude, coordinate.longitude
            );
            return Err(AddressError::DuplicateCoordinate { coordinate });
        }

        let created = self.store.insert(address).await?;
        info!(
            "Created address {} '{}' at ({}, {})",
            created.id, created.name, created.latitude, created.longitude
        );

        Ok(created)
    }

    pub async fn update(&self, id: i64, address: NewAddress) -> Result<Address, AddressError> {
        let coordinate = address.coordinate();
        validate_coordinate(&coordinate)?;

        if self.store.get(id).await?.is_none() {
            return Err(AddressError::NotFound { id });
        }

        if let Some(other) = self.store.find_by_coordinate(&coordinate).await? {
            if other.id != id {
                warn!(
                    "Rejected update of address {}: ({}, {}) belongs to address {}",
                    id, coordinate.latitude, coordinate.longitude, other.id
                );
                return Err(AddressError::DuplicateCoordinate { coordinate });
            }
        }

        let updated = self
            .store
            .update(id, address)
            .await?
            .ok_or(AddressError::NotFound { id })?;
        info!(
            "Updated address {} '{}' to ({}, {})",
            updated.id, updated.name, updated.latitude, updated.longitude
        );

        Ok(updated)
    }

    /// Removing an unknown id succeeds without changes
    pub async fn delete(&self, id: i64) -> Result<(), AddressError> {
        self.store.delete(id).await?;
        info!("Deleted address {}", id);
        Ok(())
    }
}
