use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("Catalog URL {url:?} is not an absolute http(s) URL")]
    InvalidCatalogUrl { url: String },
    #[error("Favorite list contains a blank name at position {0}")]
    BlankFavorite(usize),
}
