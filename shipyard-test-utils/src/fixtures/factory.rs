use serde_json::{json, Value};

use crate::constant::TEST_CREATED;

/// Create a SWAPI vehicle record.
///
/// # Arguments
/// - `name` - The vehicle name
/// - `created` - The `created` timestamp text
///
/// # Returns
/// - `Value` - A JSON object without a `type` key, as served by SWAPI
pub fn mock_vehicle(name: &str, created: &str) -> Value {
    json!({
        "name": name,
        "model": format!("{name} model"),
        "manufacturer": "Corellia Mining Corporation",
        "cost_in_credits": "150000",
        "length": "36.8",
        "max_atmosphering_speed": "30",
        "crew": "46",
        "passengers": "30",
        "cargo_capacity": "50000",
        "consumables": "2 months",
        "vehicle_class": "wheeled",
        "pilots": [],
        "films": ["https://swapi.dev/api/films/1/"],
        "created": created,
        "edited": created,
        "url": "https://swapi.dev/api/vehicles/4/"
    })
}

/// Create a SWAPI starship record.
///
/// # Arguments
/// - `name` - The starship name
/// - `created` - The `created` timestamp text
///
/// # Returns
/// - `Value` - A JSON object without a `type` key, as served by SWAPI
pub fn mock_starship(name: &str, created: &str) -> Value {
    json!({
        "name": name,
        "model": format!("{name} model"),
        "manufacturer": "Corellian Engineering Corporation",
        "cost_in_credits": "unknown",
        "length": "34.37",
        "max_atmosphering_speed": "1050",
        "crew": "4",
        "passengers": "6",
        "cargo_capacity": "100000",
        "consumables": "2 months",
        "hyperdrive_rating": "0.5",
        "MGLT": "75",
        "starship_class": "Light freighter",
        "pilots": [],
        "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
        "created": created,
        "edited": created,
        "url": "https://swapi.dev/api/starships/10/"
    })
}

/// Create `count` vehicles named `"{prefix} {index}"` with the default timestamp.
pub fn mock_vehicles(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| mock_vehicle(&format!("{prefix} {i}"), TEST_CREATED))
        .collect()
}

/// Create `count` starships named `"{prefix} {index}"` with the default timestamp.
pub fn mock_starships(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| mock_starship(&format!("{prefix} {i}"), TEST_CREATED))
        .collect()
}

/// Create a SWAPI film record.
pub fn mock_film(title: &str, episode_id: i64) -> Value {
    json!({
        "title": title,
        "episode_id": episode_id,
        "opening_crawl": "It is a period of civil war.",
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "url": format!("https://swapi.dev/api/films/{episode_id}/")
    })
}

/// Create a collection page.
///
/// # Arguments
/// - `results` - Records on this page
/// - `next` - Absolute URL of the following page, `None` on the last page
pub fn mock_page(results: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results
    })
}
