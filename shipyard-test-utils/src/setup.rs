use mockito::{Mock, Server, ServerGuard};

/// Mock catalog server shared by a single test.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base address of the mock catalog, used as the catalog URL in tests.
    pub fn catalog_url(&self) -> String {
        self.server.url()
    }

    /// Absolute URL of `path` on the mock catalog.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
