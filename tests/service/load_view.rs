//! Tests for CatalogService::load_view.

use shipyard::{
    model::spacecraft::Category,
    service::CatalogService,
    view::Filter,
};
use shipyard_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect the configured favorites first, then newest first, across both categories
#[tokio::test]
async fn builds_sorted_view_with_configured_favorites() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_page_endpoint(
        "/vehicles/",
        vec![
            factory::mock_vehicle("Sand Crawler", "2014-12-10T15:36:25.724000Z"),
            factory::mock_vehicle("Snowspeeder", "2014-12-15T12:22:12Z"),
        ],
        None,
        1,
    );
    test.with_page_endpoint(
        "/starships/",
        vec![
            factory::mock_starship("Death Star", "2014-12-10T16:36:50.509000Z"),
            factory::mock_starship("X-wing", "2014-12-12T11:19:05.340000Z"),
        ],
        None,
        1,
    );

    let client = test.client();
    let overrides = test.overrides();
    let service = CatalogService::new(&client, &overrides);
    let view = service.load_view(Filter::All).await;

    let names: Vec<&str> = view.iter().map(|s| s.info.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["X-wing", "Snowspeeder", "Death Star", "Sand Crawler"]
    );
    assert!(view[0].favorite);

    test.assert_mocks();

    Ok(())
}

/// Expect a category filter to still fetch the snapshot but list one category
#[tokio::test]
async fn filters_by_category() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_page_endpoint("/vehicles/", factory::mock_vehicles("vehicle", 2), None, 1);
    test.with_page_endpoint("/starships/", factory::mock_starships("starship", 3), None, 1);

    let client = test.client();
    let overrides = test.overrides();
    let service = CatalogService::new(&client, &overrides);
    let view = service.load_view(Filter::Starships).await;

    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|s| s.category() == Category::Starship));

    test.assert_mocks();

    Ok(())
}
