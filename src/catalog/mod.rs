//! Client for the remote SWAPI catalog.
//!
//! - [`pagination`]: walks a collection page by page following `next` links
//! - [`repository`]: one repository per [`Category`], bound to its collection address
//! - [`film`]: resolves film references embedded in spacecraft records

pub mod film;
pub mod pagination;
pub mod repository;

pub use repository::CategoryRepository;

use serde::de::DeserializeOwned;

use crate::{config::Config, error::Error, model::spacecraft::Category};

/// HTTP client bound to a catalog [`Config`]; cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: Config,
}

impl CatalogClient {
    /// Creates a new instance of [`CatalogClient`] with a default HTTP client
    pub fn new(config: Config) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Repository for the collection of `category`.
    pub fn repository(&self, category: Category) -> CategoryRepository<'_> {
        CategoryRepository::new(self, category)
    }

    /// GETs `url` and parses a successful response body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}
