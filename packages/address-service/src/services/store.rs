use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    error::AddressError,
    models::{Address, Coordinate, NewAddress},
};

/// Storage the address service runs against.
///
/// Implementations own the coordinate uniqueness constraint: `insert` and
/// `update` must check and write atomically and fail with
/// [`AddressError::DuplicateCoordinate`] on a collision.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Every stored address in primary key order
    async fn list_all(&self) -> Result<Vec<Address>, AddressError>;

    async fn get(&self, id: i64) -> Result<Option<Address>, AddressError>;

    async fn find_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Option<Address>, AddressError>;

    async fn insert(&self, address: NewAddress) -> Result<Address, AddressError>;

    /// Returns `None` when `id` does not exist
    async fn update(&self, id: i64, address: NewAddress) -> Result<Option<Address>, AddressError>;

    /// Deleting a missing id is not an error
    async fn delete(&self, id: i64) -> Result<(), AddressError>;
}

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, Address>,
    next_id: i64,
}

impl Table {
    fn occupant(&self, coordinate: &Coordinate) -> Option<&Address> {
        self.rows
            .values()
            .find(|address| address.coordinate() == *coordinate)
    }
}

/// Process-local address table
#[derive(Debug)]
pub struct InMemoryAddressStore {
    table: RwLock<Table>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAddressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressStore {
    async fn list_all(&self) -> Result<Vec<Address>, AddressError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Address>, AddressError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Option<Address>, AddressError> {
        let table = self.table.read().await;
        Ok(table.occupant(coordinate).cloned())
    }

    async fn insert(&self, address: NewAddress) -> Result<Address, AddressError> {
        let mut table = self.table.write().await;

        let coordinate = address.coordinate();
        if table.occupant(&coordinate).is_some() {
            return Err(AddressError::DuplicateCoordinate { coordinate });
        }

        let id = table.next_id;
        table.next_id += 1;

        let stored = address.into_address(id);
        table.rows.insert(id, stored.clone());
        debug!("Stored address {} at ({}, {})", id, stored.latitude, stored.longitude);

        Ok(stored)
    }

    async fn update(&self, id: i64, address: NewAddress) -> Result<Option<Address>, AddressError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Ok(None);
        }

        let coordinate = address.coordinate();
        if let Some(other) = table.occupant(&coordinate) {
            if other.id != id {
                return Err(AddressError::DuplicateCoordinate { coordinate });
            }
        }

        let updated = address.into_address(id);
        table.rows.insert(id, updated.clone());

        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<(), AddressError> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            debug!("Delete of missing address {} ignored", id);
        }
        Ok(())
    }
}
