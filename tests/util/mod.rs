//! Builds Shipyard clients pointed at the mock catalog of a [`TestSetup`].

use shipyard::{
    catalog::CatalogClient,
    config::Config,
    store::{LocalOverrideStore, MemoryStore},
};
use shipyard_test_utils::TestSetup;

/// Extension trait for TestSetup to create Shipyard components against the mock server
pub trait TestSetupExt {
    fn config(&self) -> Config;
    fn client(&self) -> CatalogClient;
    fn overrides(&self) -> LocalOverrideStore<MemoryStore>;
}

impl TestSetupExt for TestSetup {
    fn config(&self) -> Config {
        Config::new(&self.catalog_url()).expect("mock server URL should be a valid catalog URL")
    }

    fn client(&self) -> CatalogClient {
        CatalogClient::new(self.config())
    }

    fn overrides(&self) -> LocalOverrideStore<MemoryStore> {
        LocalOverrideStore::new(MemoryStore::new())
    }
}
