use dioxus_logger::tracing;

use crate::{
    catalog::{CatalogClient, CategoryRepository},
    error::Error,
    model::{
        draft::SpacecraftDraft,
        spacecraft::{Category, Spacecraft},
    },
    store::{KeyValueStore, LocalOverrideStore},
    view::{CatalogSnapshot, Filter},
};

pub struct CatalogService<'a, S> {
    client: &'a CatalogClient,
    overrides: &'a LocalOverrideStore<S>,
}

impl<'a, S: KeyValueStore> CatalogService<'a, S> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(client: &'a CatalogClient, overrides: &'a LocalOverrideStore<S>) -> Self {
        Self { client, overrides }
    }

    /// Fetches both collections concurrently & merges each with its local spacecraft.
    ///
    /// Never fails: unreachable collections and malformed local entries degrade to
    /// smaller lists.
    pub async fn load_snapshot(&self) -> CatalogSnapshot {
        let vehicle_repo = CategoryRepository::vehicles(self.client);
        let starship_repo = CategoryRepository::starships(self.client);

        let (vehicles, starships) =
            futures::join!(vehicle_repo.fetch_all(), starship_repo.fetch_all());

        tracing::debug!(
            "Fetched {} vehicle(s) & {} starship(s) from the catalog",
            vehicles.len(),
            starships.len()
        );

        CatalogSnapshot::new(
            self.overrides.merge(Category::Vehicle, vehicles),
            self.overrides.merge(Category::Starship, starships),
        )
    }

    /// Loads the snapshot and builds the listing for `filter` with the configured
    /// favorites.
    pub async fn load_view(&self, filter: Filter) -> Vec<Spacecraft> {
        self.load_snapshot()
            .await
            .build_view(filter, &self.client.config().favorites)
    }

    /// Validates `draft` and stores the resulting spacecraft locally.
    ///
    /// # Returns
    /// - `Ok(Spacecraft)`: the stored record, timestamped now
    /// - `Err(Error::DraftError)`: a required field is empty
    /// - `Err(Error::StoreError)`: the record could not be written
    pub fn create(&self, draft: SpacecraftDraft) -> Result<Spacecraft, Error> {
        let category = draft.category;
        let record = draft.into_spacecraft(chrono::Utc::now())?;

        self.overrides.save(category, record.clone())?;
        tracing::info!("Created local {} {:?}", category, record.info.name);

        Ok(record)
    }
}
