use serde::{Deserialize, Serialize};

/// One page of a SWAPI collection.
///
/// Only `results` and `next` are read; `count` and `previous` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

/// A film as returned by a SWAPI film reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub episode_id: Option<i64>,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub url: String,
}

/// Outcome of resolving a single film reference for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmTitle {
    Resolved(String),
    /// The lookup failed; the reference is kept but its title is unknown.
    Unavailable,
    /// The reference was empty and no lookup was made.
    Missing,
}

impl FilmTitle {
    pub fn label(&self) -> &str {
        match self {
            FilmTitle::Resolved(title) => title,
            FilmTitle::Unavailable => "title unavailable",
            FilmTitle::Missing => "unknown film",
        }
    }
}
