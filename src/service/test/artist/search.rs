use super::*;

/// Tests searching with an empty term.
///
/// The context is built without any tables, so a query would fail with a
/// database error; the validation rejection must come first.
///
/// Expected: Err(AppError::BadRequest) without issuing a query
#[tokio::test]
async fn rejects_empty_term_without_querying() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArtistService::new(db);
    let result = service.search("").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests searching with a whitespace-only term.
///
/// Expected: Err(AppError::BadRequest) without issuing a query
#[tokio::test]
async fn rejects_whitespace_term_without_querying() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArtistService::new(db);
    let result = service.search("\t ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that surrounding whitespace is trimmed before matching.
///
/// Expected: Ok with the artist found for a padded term
#[tokio::test]
async fn trims_term_before_matching() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::artist::ArtistFactory::new(db)
        .name("Guns N Petals")
        .build()
        .await?;

    let service = ArtistService::new(db);
    let artists = service.search("  Petals  ").await.unwrap();

    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Guns N Petals");

    Ok(())
}
