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

    let service = VenueService::new(db);
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

    let service = VenueService::new(db);
    let result = service.search("   ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that surrounding whitespace is trimmed before matching.
///
/// Expected: Ok with the venue found for a padded term
#[tokio::test]
async fn trims_term_before_matching() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::venue::VenueFactory::new(db)
        .name("The Musical Hop")
        .build()
        .await?;

    let service = VenueService::new(db);
    let venues = service.search("  Hop  ").await.unwrap();

    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].name, "The Musical Hop");

    Ok(())
}
