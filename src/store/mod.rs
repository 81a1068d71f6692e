//! Local override store for spacecraft created in the browser.
//!
//! Records are kept per category as a JSON array under a fixed key (see
//! [`Category::storage_key`]). The key-value backend is injected through
//! [`KeyValueStore`]: the browser build uses `localStorage`, tests use [`MemoryStore`].
//!
//! There is a single writer per device profile so saves are a plain read-modify-write
//! without locking.

#[cfg(feature = "web")]
mod browser;
mod memory;

#[cfg(test)]
mod tests;

#[cfg(feature = "web")]
pub use browser::BrowserStorage;
pub use memory::MemoryStore;

use dioxus_logger::tracing;

use crate::{
    error::{store::StoreError, Error},
    model::spacecraft::{CatalogRecord, Category, Spacecraft, StarshipDetails, VehicleDetails},
};

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct LocalOverrideStore<S> {
    backend: S,
}

impl<S: KeyValueStore> LocalOverrideStore<S> {
    /// Creates a new instance of [`LocalOverrideStore`] over `backend`
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads the spacecraft created locally for `category`.
    ///
    /// # Returns
    /// - `Ok(Vec<Spacecraft>)`: stored spacecraft in insertion order, empty if the key is absent
    /// - `Err(Error::StoreError)`: the backend is unavailable or the entry is not a JSON
    ///   array of spacecraft
    ///
    /// Records are tagged by the key they were read from; a stored `type` key is ignored.
    pub fn load(&self, category: Category) -> Result<Vec<Spacecraft>, Error> {
        let key = category.storage_key();

        let Some(raw) = self.backend.get(key)? else {
            return Ok(Vec::new());
        };

        let records = decode(category, &raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;

        Ok(records)
    }

    /// Same as [`Self::load`] but logs failures and treats them as an empty category.
    pub fn load_or_empty(&self, category: Category) -> Vec<Spacecraft> {
        match self.load(category) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Ignoring local {} entries: {}", category, e);
                Vec::new()
            }
        }
    }

    /// Appends `record` to the spacecraft stored for `category`.
    ///
    /// The whole array is re-encoded and overwrites the entry. A malformed entry is left
    /// untouched and reported instead of being replaced.
    ///
    /// # Returns
    /// - `Ok(())`: the record was stored
    /// - `Err(Error::StoreError)`: `record` belongs to another category, the current entry
    ///   is malformed, or the backend rejected the write
    pub fn save(&self, category: Category, record: Spacecraft) -> Result<(), Error> {
        if record.category() != category {
            return Err(StoreError::CategoryMismatch {
                expected: category,
                found: record.category(),
            }
            .into());
        }

        let mut records = self.load(category)?;
        records.push(record);

        let raw = serde_json::to_string(&records)?;
        self.backend.set(category.storage_key(), &raw)?;

        tracing::debug!(
            "Stored local {}, {} now stored under {}",
            category,
            records.len(),
            category.storage_key()
        );

        Ok(())
    }

    /// Merges freshly fetched `remote` spacecraft with the local ones, remote first.
    pub fn merge(&self, category: Category, mut remote: Vec<Spacecraft>) -> Vec<Spacecraft> {
        remote.extend(self.load_or_empty(category));
        remote
    }
}

/// Decodes a stored array, tagging every record with `category` whatever its `type` key.
fn decode(category: Category, raw: &str) -> Result<Vec<Spacecraft>, serde_json::Error> {
    let records = match category {
        Category::Vehicle => serde_json::from_str::<Vec<CatalogRecord<VehicleDetails>>>(raw)?
            .into_iter()
            .map(Spacecraft::from)
            .collect(),
        Category::Starship => serde_json::from_str::<Vec<CatalogRecord<StarshipDetails>>>(raw)?
            .into_iter()
            .map(Spacecraft::from)
            .collect(),
    };

    Ok(records)
}
