use thiserror::Error;

use crate::model::spacecraft::Category;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The stored value exists but is not a JSON array of spacecraft.
    ///
    /// The store is only ever written through `LocalOverrideStore::save`, so this
    /// indicates the entry was edited externally.
    #[error("Local entry {key:?} is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write local entry {key:?}: {reason}")]
    WriteFailed { key: String, reason: String },
    #[error("Cannot store a {found} under the {expected} entry")]
    CategoryMismatch { expected: Category, found: Category },
}
