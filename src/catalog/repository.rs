use crate::{
    catalog::CatalogClient,
    model::spacecraft::{CatalogRecord, Category, Spacecraft, StarshipDetails, VehicleDetails},
};

/// Remote collection of one spacecraft category.
pub struct CategoryRepository<'a> {
    client: &'a CatalogClient,
    category: Category,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(client: &'a CatalogClient, category: Category) -> Self {
        Self { client, category }
    }

    pub fn vehicles(client: &'a CatalogClient) -> Self {
        Self::new(client, Category::Vehicle)
    }

    pub fn starships(client: &'a CatalogClient) -> Self {
        Self::new(client, Category::Starship)
    }

    /// Fetches the whole collection, tagging each record with the repository's category.
    ///
    /// Never fails: upstream errors end pagination early and yield a partial (possibly
    /// empty) list, see [`CatalogClient::fetch_all_pages`].
    pub async fn fetch_all(&self) -> Vec<Spacecraft> {
        let url = self.client.config().collection_url(self.category);

        match self.category {
            Category::Vehicle => self
                .client
                .fetch_all_pages::<CatalogRecord<VehicleDetails>>(&url)
                .await
                .into_iter()
                .map(Spacecraft::from)
                .collect(),
            Category::Starship => self
                .client
                .fetch_all_pages::<CatalogRecord<StarshipDetails>>(&url)
                .await
                .into_iter()
                .map(Spacecraft::from)
                .collect(),
        }
    }
}
