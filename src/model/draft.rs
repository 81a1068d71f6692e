use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    error::draft::DraftError,
    model::spacecraft::{
        Category, Details, Spacecraft, SpacecraftInfo, StarshipDetails, VehicleDetails,
    },
};

/// Form input for a spacecraft created in the browser.
///
/// Holds the fields of both categories so the user can switch category without losing
/// input; only the fields of the selected category end up in the record.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacecraftDraft {
    pub category: Category,
    pub favorite: bool,
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
    pub vehicle_class: String,
    pub starship_class: String,
    pub hyperdrive_rating: String,
    pub mglt: String,
}

impl Default for SpacecraftDraft {
    fn default() -> Self {
        Self {
            category: Category::Vehicle,
            favorite: false,
            name: String::new(),
            model: String::new(),
            manufacturer: String::new(),
            length: String::new(),
            cost_in_credits: String::new(),
            crew: String::new(),
            passengers: String::new(),
            max_atmosphering_speed: String::new(),
            cargo_capacity: String::new(),
            consumables: String::new(),
            vehicle_class: String::new(),
            starship_class: String::new(),
            hyperdrive_rating: String::new(),
            mglt: String::new(),
        }
    }
}

impl SpacecraftDraft {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Presence checks on name, model & manufacturer; no other validation is performed.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("name", &self.name),
            ("model", &self.model),
            ("manufacturer", &self.manufacturer),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }

        Ok(())
    }

    /// Validates the draft and builds the record, stamping `created` & `edited` with `now`.
    pub fn into_spacecraft(self, now: DateTime<Utc>) -> Result<Spacecraft, DraftError> {
        self.validate()?;

        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let details = match self.category {
            Category::Vehicle => Details::Vehicle(VehicleDetails {
                vehicle_class: self.vehicle_class,
            }),
            Category::Starship => Details::Starship(StarshipDetails {
                starship_class: self.starship_class,
                hyperdrive_rating: self.hyperdrive_rating,
                mglt: self.mglt,
            }),
        };

        Ok(Spacecraft {
            favorite: self.favorite,
            info: SpacecraftInfo {
                name: self.name,
                model: self.model,
                manufacturer: self.manufacturer,
                length: self.length,
                cost_in_credits: self.cost_in_credits,
                crew: self.crew,
                passengers: self.passengers,
                max_atmosphering_speed: self.max_atmosphering_speed,
                cargo_capacity: self.cargo_capacity,
                consumables: self.consumables,
                films: Vec::new(),
                pilots: Vec::new(),
                url: String::new(),
                created: timestamp.clone(),
                edited: timestamp,
            },
            details,
        })
    }
}
