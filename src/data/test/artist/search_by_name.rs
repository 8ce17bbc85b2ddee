use super::*;

/// Tests searching with a term contained in one artist name.
///
/// Expected: Ok with only the matching artist
#[tokio::test]
async fn finds_artist_by_substring() -> Result<(), DbErr> {
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
    factory::artist::ArtistFactory::new(db)
        .name("The Wild Sax Band")
        .build()
        .await?;

    let repo = ArtistRepository::new(db);
    let results = repo.search_by_name("Petals").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Guns N Petals");

    Ok(())
}

/// Tests that search matching ignores case on both sides.
///
/// Expected: Ok with the artist found despite a differently-cased term
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::artist::ArtistFactory::new(db)
        .name("The Wild Sax Band")
        .build()
        .await?;

    let repo = ArtistRepository::new(db);
    let results = repo.search_by_name("wild sax").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "The Wild Sax Band");

    Ok(())
}

/// Tests a term matching nothing.
///
/// Expected: Ok with an empty result set
#[tokio::test]
async fn returns_empty_for_no_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::artist::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let results = repo.search_by_name("zzzzz").await?;

    assert!(results.is_empty());

    Ok(())
}
