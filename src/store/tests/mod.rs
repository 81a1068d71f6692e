
use crate::{
    error::{store::StoreError, Error},
    model::spacecraft::{
        Category, Details, Spacecraft, SpacecraftInfo, StarshipDetails, VehicleDetails,
    },
    store::{KeyValueStore, LocalOverrideStore, MemoryStore},
};

/// Backend whose reads succeed but every write is rejected, like a full quota.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteFailed {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

fn local_vehicle(name: &str) -> Spacecraft {
    Spacecraft {
        favorite: false,
        info: SpacecraftInfo {
            name: name.to_string(),
            created: "2024-05-04T12:00:00.000Z".to_string(),
            edited: "2024-05-04T12:00:00.000Z".to_string(),
            ..Default::default()
        },
        details: Details::Vehicle(VehicleDetails {
            vehicle_class: "speeder".to_string(),
        }),
    }
}

fn local_starship(name: &str) -> Spacecraft {
    Spacecraft {
        favorite: true,
        info: SpacecraftInfo {
            name: name.to_string(),
            films: vec!["https://swapi.dev/api/films/2/".to_string()],
            ..Default::default()
        },
        details: Details::Starship(StarshipDetails {
            starship_class: "freighter".to_string(),
            hyperdrive_rating: "0.5".to_string(),
            mglt: "75".to_string(),
        }),
    }
}
