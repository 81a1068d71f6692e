use shipyard::{
    catalog::CatalogClient,
    config::Config,
    service::CatalogService,
    store::LocalOverrideStore,
};

#[cfg(feature = "web")]
pub type AppStorage = shipyard::store::BrowserStorage;

#[cfg(not(feature = "web"))]
pub type AppStorage = shipyard::store::MemoryStore;

/// Shared by every route through the Dioxus context.
#[derive(Clone)]
pub struct AppState {
    pub client: CatalogClient,
    pub overrides: LocalOverrideStore<AppStorage>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            client: CatalogClient::new(config),
            overrides: LocalOverrideStore::new(AppStorage::default()),
        }
    }

    pub fn service(&self) -> CatalogService<'_, AppStorage> {
        CatalogService::new(&self.client, &self.overrides)
    }
}
