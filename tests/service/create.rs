//! Tests for CatalogService::create.

use shipyard::{
    error::{draft::DraftError, Error},
    model::{draft::SpacecraftDraft, spacecraft::Category},
    service::CatalogService,
    view::Filter,
};
use shipyard_test_utils::prelude::*;

use crate::TestSetupExt;

fn draft(category: Category, name: &str) -> SpacecraftDraft {
    SpacecraftDraft {
        name: name.to_string(),
        model: "custom".to_string(),
        manufacturer: "homemade".to_string(),
        ..SpacecraftDraft::new(category)
    }
}

/// Expect a created spacecraft to be stored and listed after the remote ones it outdates
#[tokio::test]
async fn created_spacecraft_appears_in_view() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_page_endpoint("/vehicles/", factory::mock_vehicles("remote", 2), None, 1);
    test.with_page_endpoint("/starships/", Vec::new(), None, 1);

    let client = test.client();
    let overrides = test.overrides();
    let service = CatalogService::new(&client, &overrides);

    let created = service.create(draft(Category::Vehicle, "Y"));
    assert!(created.is_ok());
    let created = created.unwrap();

    let stored = overrides.load(Category::Vehicle);
    assert!(stored.is_ok());
    assert_eq!(stored.unwrap(), vec![created.clone()]);

    // Newest first: the new vehicle precedes the 2014 catalog entries
    let view = service.load_view(Filter::Vehicles).await;
    assert_eq!(view.len(), 3);
    assert_eq!(view[0], created);

    test.assert_mocks();

    Ok(())
}

/// Expect an explicit favorite to keep its flag through the view
#[tokio::test]
async fn explicit_favorite_is_kept() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_page_endpoint("/vehicles/", Vec::new(), None, 1);
    test.with_page_endpoint("/starships/", factory::mock_starships("remote", 1), None, 1);

    let client = test.client();
    let overrides = test.overrides();
    let service = CatalogService::new(&client, &overrides);

    let mut favorite = draft(Category::Starship, "Not on the list");
    favorite.favorite = true;
    service.create(favorite).expect("draft is valid");

    let view = service.load_view(Filter::All).await;
    assert_eq!(view[0].info.name, "Not on the list");
    assert!(view[0].favorite);

    test.assert_mocks();

    Ok(())
}

/// Expect Error and nothing stored when a required field is missing
#[tokio::test]
async fn rejects_incomplete_draft() -> Result<(), TestError> {
    let test = TestSetup::new().await;

    let client = test.client();
    let overrides = test.overrides();
    let service = CatalogService::new(&client, &overrides);

    let mut incomplete = draft(Category::Starship, "Nameless");
    incomplete.manufacturer.clear();
    let result = service.create(incomplete);

    assert!(matches!(
        result,
        Err(Error::DraftError(DraftError::MissingField("manufacturer")))
    ));
    assert!(overrides.load(Category::Starship).unwrap().is_empty());

    Ok(())
}
