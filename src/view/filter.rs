use std::fmt;

use crate::model::spacecraft::Category;

/// Category selection of the catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Vehicles,
    Starships,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Vehicles, Filter::Starships];

    /// The single category selected, `None` for [`Filter::All`].
    pub fn category(self) -> Option<Category> {
        match self {
            Filter::All => None,
            Filter::Vehicles => Some(Category::Vehicle),
            Filter::Starships => Some(Category::Starship),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Vehicles => "Vehicles",
            Filter::Starships => "Starships",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}
