use reqwest::Url;

use crate::{error::config::ConfigError, model::spacecraft::Category, view::FavoriteList};

/// Base address of the public SWAPI catalog.
pub const DEFAULT_CATALOG_URL: &str = "https://swapi.dev/api";

/// Spacecraft shown as favorites unless configured otherwise.
pub const DEFAULT_FAVORITES: [&str; 2] = ["Millennium Falcon", "X-wing"];

const CATALOG_URL_VAR: &str = "SHIPYARD_CATALOG_URL";
const FAVORITES_VAR: &str = "SHIPYARD_FAVORITES";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog base address without a trailing slash, e.g. `https://swapi.dev/api`
    pub catalog_url: String,
    pub favorites: FavoriteList,
}

impl Config {
    /// Creates a configuration for the catalog at `catalog_url` with the default favorites.
    pub fn new(catalog_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            catalog_url: validate_catalog_url(catalog_url)?,
            favorites: FavoriteList::new(DEFAULT_FAVORITES),
        })
    }

    pub fn with_favorites<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let favorites = FavoriteList::new(names);
        if let Some(position) = favorites.names().iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::BlankFavorite(position));
        }

        self.favorites = favorites;
        Ok(self)
    }

    /// Reads `SHIPYARD_CATALOG_URL` & `SHIPYARD_FAVORITES`, falling back to the defaults
    /// for unset variables.
    ///
    /// In the browser build no environment exists and the defaults are always used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(CATALOG_URL_VAR).ok(),
            std::env::var(FAVORITES_VAR).ok(),
        )
    }

    /// Builds a configuration from raw variable values, `favorites` being comma-separated.
    pub fn from_values(
        catalog_url: Option<String>,
        favorites: Option<String>,
    ) -> Result<Self, ConfigError> {
        let catalog_url = catalog_url.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let config = Self::new(&catalog_url).map_err(|e| ConfigError::InvalidEnvValue {
            var: CATALOG_URL_VAR.to_string(),
            reason: e.to_string(),
        })?;

        match favorites {
            Some(favorites) => config
                .with_favorites(favorites.split(',').map(str::trim))
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: FAVORITES_VAR.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(config),
        }
    }

    /// Starting address of the paginated collection for `category`.
    pub fn collection_url(&self, category: Category) -> String {
        format!("{}/{}/", self.catalog_url, category.collection())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            favorites: FavoriteList::new(DEFAULT_FAVORITES),
        }
    }
}

fn validate_catalog_url(catalog_url: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidCatalogUrl {
        url: catalog_url.to_string(),
    };

    let url = Url::parse(catalog_url).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    Ok(catalog_url.trim_end_matches('/').to_string())
}
