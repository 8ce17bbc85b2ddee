use super::*;

/// Tests getting an artist that exists.
///
/// Expected: Ok(Some) with the artist's fields converted to the domain model
#[tokio::test]
async fn gets_existing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::artist::ArtistFactory::new(db)
        .name("Matt Quevedo")
        .genres(vec!["Jazz".to_string()])
        .build()
        .await?;

    let repo = ArtistRepository::new(db);
    let artist = repo.get_by_id(created.id).await?;

    assert!(artist.is_some());
    let artist = artist.unwrap();
    assert_eq!(artist.id, created.id);
    assert_eq!(artist.name, "Matt Quevedo");
    assert_eq!(artist.genres, vec!["Jazz".to_string()]);

    Ok(())
}

/// Tests getting an artist ID with no matching row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let artist = repo.get_by_id(9999).await?;

    assert!(artist.is_none());

    Ok(())
}
