use std::collections::HashSet;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{catalog::CatalogClient, error::Error, model::catalog::Page};

impl CatalogClient {
    /// Fetches every item of a paginated collection starting at `start_url`.
    ///
    /// Pages are requested one after another, each `next` link only being known once the
    /// previous page arrived. Items keep the server order, page after page.
    ///
    /// Fetching stops without error on the first failed request, non-success status or
    /// unparseable page, and when a `next` link points at an already visited page. The
    /// items gathered so far are returned, so the result is always a complete prefix of
    /// the collection (possibly empty).
    pub async fn fetch_all_pages<T: DeserializeOwned>(&self, start_url: &str) -> Vec<T> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(start_url.to_string());

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                tracing::warn!(
                    "Pagination cycle detected at {}, stopping with {} item(s)",
                    url,
                    items.len()
                );
                break;
            }

            match self.fetch_page::<T>(&url).await {
                Ok(page) => {
                    tracing::debug!("Fetched {} item(s) from {}", page.results.len(), url);

                    items.extend(page.results);
                    next = page.next.filter(|link| !link.is_empty());
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to fetch catalog page {}, keeping {} item(s): {}",
                        url,
                        items.len(),
                        e
                    );
                    break;
                }
            }
        }

        items
    }

    /// Fetches and parses a single page.
    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, Error> {
        self.get_json::<Page<T>>(url).await
    }
}
