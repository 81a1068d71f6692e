//! View-model for the catalog listing.
//!
//! Everything here is a pure, synchronous transformation over spacecraft already loaded
//! into a [`CatalogSnapshot`]. Network and storage access happen before, in
//! [`crate::service`].

mod favorite;
mod filter;


use std::cmp::Ordering;

pub use favorite::FavoriteList;
pub use filter::Filter;

use crate::model::spacecraft::{Category, Spacecraft};

/// Merged (remote followed by local) spacecraft of both categories for one display cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub vehicles: Vec<Spacecraft>,
    pub starships: Vec<Spacecraft>,
}

impl CatalogSnapshot {
    pub fn new(vehicles: Vec<Spacecraft>, starships: Vec<Spacecraft>) -> Self {
        Self {
            vehicles,
            starships,
        }
    }

    /// Merged spacecraft of a single category.
    pub fn category(&self, category: Category) -> &[Spacecraft] {
        match category {
            Category::Vehicle => &self.vehicles,
            Category::Starship => &self.starships,
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len() + self.starships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty() && self.starships.is_empty()
    }

    /// Builds the listing for `filter`.
    ///
    /// 1. Selects the merged list of the filtered category, or vehicles followed by
    ///    starships for [`Filter::All`]
    /// 2. Derives favorite flags from `favorites` (explicit favorites are kept)
    /// 3. Sorts favorites first, then most recently created first; equal entries keep
    ///    the order of step 1
    pub fn build_view(&self, filter: Filter, favorites: &FavoriteList) -> Vec<Spacecraft> {
        let mut items: Vec<Spacecraft> = match filter.category() {
            Some(category) => self.category(category).to_vec(),
            None => self
                .vehicles
                .iter()
                .chain(self.starships.iter())
                .cloned()
                .collect(),
        };

        derive_favorites(&mut items, favorites);
        sort_for_display(&mut items);

        items
    }
}

/// Marks spacecraft whose name is on the favorite list; flags already set stay set.
pub fn derive_favorites(items: &mut [Spacecraft], favorites: &FavoriteList) {
    for item in items.iter_mut() {
        item.favorite = item.favorite || favorites.contains(&item.info.name);
    }
}

/// Stable sort: favorites first, then by creation time, newest first.
///
/// Spacecraft whose creation time can't be parsed sort after those that can.
pub fn sort_for_display(items: &mut [Spacecraft]) {
    items.sort_by(display_order);
}

fn display_order(a: &Spacecraft, b: &Spacecraft) -> Ordering {
    b.favorite
        .cmp(&a.favorite)
        .then_with(|| b.created_at().cmp(&a.created_at()))
}
