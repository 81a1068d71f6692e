//! Tests for CategoryRepository::fetch_all.

use shipyard::model::spacecraft::{Category, Details};
use shipyard_test_utils::{constant::TEST_CREATED, prelude::*};

use crate::TestSetupExt;

/// Expect vehicles to be fetched from the vehicles collection & tagged as vehicles
#[tokio::test]
async fn fetches_and_tags_vehicles() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let page_2 = test.url_for("/vehicles/2/");

    test.with_page_endpoint(
        "/vehicles/",
        vec![factory::mock_vehicle("Sand Crawler", TEST_CREATED)],
        Some(&page_2),
        1,
    );
    test.with_page_endpoint(
        "/vehicles/2/",
        vec![factory::mock_vehicle("Snowspeeder", TEST_CREATED)],
        None,
        1,
    );

    let client = test.client();
    let vehicles = client.repository(Category::Vehicle).fetch_all().await;

    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].info.name, "Sand Crawler");
    assert_eq!(vehicles[1].info.name, "Snowspeeder");
    assert!(vehicles.iter().all(|v| v.category() == Category::Vehicle));
    assert!(vehicles.iter().all(|v| !v.favorite));
    match &vehicles[0].details {
        Details::Vehicle(details) => assert_eq!(details.vehicle_class, "wheeled"),
        Details::Starship(_) => panic!("expected vehicle details"),
    }

    test.assert_mocks();

    Ok(())
}

/// Expect starship specific fields to be read, sentinel values kept verbatim
#[tokio::test]
async fn fetches_starship_fields() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_page_endpoint(
        "/starships/",
        vec![factory::mock_starship("Millennium Falcon", TEST_CREATED)],
        None,
        1,
    );

    let client = test.client();
    let starships = client.repository(Category::Starship).fetch_all().await;

    assert_eq!(starships.len(), 1);
    let falcon = &starships[0];
    assert_eq!(falcon.category(), Category::Starship);
    assert_eq!(falcon.info.cost_in_credits, "unknown");
    assert_eq!(falcon.info.films.len(), 2);
    match &falcon.details {
        Details::Starship(details) => {
            assert_eq!(details.mglt, "75");
            assert_eq!(details.hyperdrive_rating, "0.5");
            assert_eq!(details.starship_class, "Light freighter");
        }
        Details::Vehicle(_) => panic!("expected starship details"),
    }

    test.assert_mocks();

    Ok(())
}

/// Expect an empty list, not an error, when the collection is unavailable
#[tokio::test]
async fn returns_empty_on_upstream_failure() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_failing_endpoint("/starships/", 503, 1);

    let client = test.client();
    let starships = client.repository(Category::Starship).fetch_all().await;

    assert!(starships.is_empty());

    test.assert_mocks();

    Ok(())
}
