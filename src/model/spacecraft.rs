//! Spacecraft records shared by the remote catalog and the local override store.
//!
//! SWAPI serves vehicles and starships as flat JSON objects. Locally created records use
//! the same flat shape plus a `type` discriminant (`"vehicle"` or `"starship"`) which
//! selects the [`Details`] variant. Remote records carry no discriminant and local ones
//! may lack it too; both are read through [`CatalogRecord`] and tagged by where they
//! were read from (collection or storage key).

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vehicle,
    Starship,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Vehicle, Category::Starship];

    /// Key of the local storage entry holding spacecraft created for this category.
    pub fn storage_key(self) -> &'static str {
        match self {
            Category::Vehicle => "localVehicles",
            Category::Starship => "localStarships",
        }
    }

    /// Path segment of the SWAPI collection for this category.
    pub fn collection(self) -> &'static str {
        match self {
            Category::Vehicle => "vehicles",
            Category::Starship => "starships",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Vehicle => "vehicle",
            Category::Starship => "starship",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicle" => Ok(Category::Vehicle),
            "starship" => Ok(Category::Starship),
            other => Err(format!("Unknown spacecraft category: {other:?}")),
        }
    }
}

/// Fields common to vehicles and starships.
///
/// Numeric-looking fields are kept as text since SWAPI uses sentinels such as `"unknown"`
/// and `"n/a"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacecraftInfo {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: String,
    pub cost_in_credits: String,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub films: Vec<String>,
    pub pilots: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleDetails {
    pub vehicle_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarshipDetails {
    pub starship_class: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
}

impl StarshipDetails {
    /// Megalights per hour, `"unknown"` when left empty.
    pub fn display_mglt(&self) -> &str {
        if self.mglt.is_empty() {
            "unknown"
        } else {
            &self.mglt
        }
    }
}

/// Category specific fields, discriminated by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    Vehicle(VehicleDetails),
    Starship(StarshipDetails),
}

impl Details {
    pub fn category(&self) -> Category {
        match self {
            Details::Vehicle(_) => Category::Vehicle,
            Details::Starship(_) => Category::Starship,
        }
    }
}

impl From<VehicleDetails> for Details {
    fn from(details: VehicleDetails) -> Self {
        Details::Vehicle(details)
    }
}

impl From<StarshipDetails> for Details {
    fn from(details: StarshipDetails) -> Self {
        Details::Starship(details)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacecraft {
    #[serde(default)]
    pub favorite: bool,
    #[serde(flatten)]
    pub info: SpacecraftInfo,
    #[serde(flatten)]
    pub details: Details,
}

impl Spacecraft {
    pub fn category(&self) -> Category {
        self.details.category()
    }

    /// Creation timestamp parsed from the `created` text.
    ///
    /// Accepts RFC 3339 (as served by SWAPI and written locally), a zone-less
    /// date-time, or a bare `YYYY-MM-DD` date taken as midnight UTC.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.info.created)
    }

    /// Cost in credits, `"unknown price"` when left empty.
    pub fn display_cost(&self) -> String {
        if self.info.cost_in_credits.is_empty() {
            "unknown price".to_string()
        } else {
            format!("ᖬ{}", self.info.cost_in_credits)
        }
    }

    /// Creation date as `dd/mm/yyyy`, or the raw text when it cannot be parsed.
    pub fn created_date(&self) -> String {
        match self.created_at() {
            Some(created) => created.format("%d/%m/%Y").to_string(),
            None => self.info.created.clone(),
        }
    }
}

/// Wire shape of a record before it is tagged with its category.
///
/// A `type` key, if present, is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord<D> {
    #[serde(default)]
    pub favorite: bool,
    #[serde(flatten)]
    pub info: SpacecraftInfo,
    #[serde(flatten)]
    pub details: D,
}

impl<D: Into<Details>> From<CatalogRecord<D>> for Spacecraft {
    fn from(record: CatalogRecord<D>) -> Self {
        Spacecraft {
            favorite: record.favorite,
            info: record.info,
            details: record.details.into(),
        }
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
