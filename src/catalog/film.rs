use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    catalog::CatalogClient,
    error::Error,
    model::catalog::{Film, FilmTitle},
};

impl CatalogClient {
    /// Fetches the film at the absolute reference `url`; no retry.
    pub async fn fetch_film(&self, url: &str) -> Result<Film, Error> {
        self.get_json::<Film>(url).await
    }

    /// Resolves the titles of a spacecraft's film references.
    ///
    /// All lookups run concurrently. The result is indexed like `urls` regardless of the
    /// order lookups complete in. Empty references are not looked up, failed lookups only
    /// affect their own entry.
    pub async fn resolve_film_titles(&self, urls: &[String]) -> Vec<FilmTitle> {
        let lookups = urls.iter().map(|url| async move {
            if url.trim().is_empty() {
                return FilmTitle::Missing;
            }

            match self.fetch_film(url).await {
                Ok(film) => FilmTitle::Resolved(film.title),
                Err(e) => {
                    tracing::warn!("Failed to resolve film {}: {}", url, e);
                    FilmTitle::Unavailable
                }
            }
        });

        join_all(lookups).await
    }
}
