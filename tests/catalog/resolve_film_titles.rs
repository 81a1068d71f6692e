//! Tests for film reference resolution.

use std::time::Duration;

use shipyard::{error::Error, model::catalog::FilmTitle};
use shipyard_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect the film record behind an absolute reference
#[tokio::test]
async fn fetches_single_film() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_film_endpoint("/films/1/", "A New Hope", 4, 1);

    let client = test.client();
    let film = client.fetch_film(&test.url_for("/films/1/")).await;

    assert!(film.is_ok());
    let film = film.unwrap();
    assert_eq!(film.title, "A New Hope");
    assert_eq!(film.episode_id, Some(4));

    test.assert_mocks();

    Ok(())
}

/// Expect Error with the status when the film is missing
#[tokio::test]
async fn fetch_film_reports_status() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_failing_endpoint("/films/9/", 404, 1);

    let client = test.client();
    let result = client.fetch_film(&test.url_for("/films/9/")).await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 404, .. })
    ));

    test.assert_mocks();

    Ok(())
}

/// Expect titles indexed like the references, failures isolated to their own entry
#[tokio::test]
async fn resolves_titles_by_index() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_film_endpoint("/films/1/", "A New Hope", 4, 1);
    test.with_failing_endpoint("/films/2/", 500, 1);
    test.with_film_endpoint("/films/3/", "Return of the Jedi", 6, 1);

    let urls = vec![
        test.url_for("/films/1/"),
        test.url_for("/films/2/"),
        String::new(),
        test.url_for("/films/3/"),
    ];

    let client = test.client();
    let titles = client.resolve_film_titles(&urls).await;

    assert_eq!(
        titles,
        vec![
            FilmTitle::Resolved("A New Hope".to_string()),
            FilmTitle::Unavailable,
            FilmTitle::Missing,
            FilmTitle::Resolved("Return of the Jedi".to_string()),
        ]
    );
    assert_eq!(titles[1].label(), "title unavailable");

    test.assert_mocks();

    Ok(())
}

/// Expect no lookups for a spacecraft without films
#[tokio::test]
async fn no_references_no_requests() -> Result<(), TestError> {
    let test = TestSetup::new().await;

    let client = test.client();
    let titles = client.resolve_film_titles(&[]).await;

    assert!(titles.is_empty());

    Ok(())
}

/// Expect a slow first lookup to keep its index when later ones finish first
#[tokio::test]
async fn slow_lookup_keeps_its_index() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_slow_film_endpoint(
        "/films/1/",
        "A New Hope",
        4,
        Duration::from_millis(300),
        1,
    );
    test.with_film_endpoint("/films/2/", "The Empire Strikes Back", 5, 1);

    let urls = vec![test.url_for("/films/1/"), test.url_for("/films/2/")];

    let client = test.client();
    let titles = client.resolve_film_titles(&urls).await;

    assert_eq!(
        titles,
        vec![
            FilmTitle::Resolved("A New Hope".to_string()),
            FilmTitle::Resolved("The Empire Strikes Back".to_string()),
        ]
    );

    test.assert_mocks();

    Ok(())
}
