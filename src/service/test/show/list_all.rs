use super::*;

/// Tests that the listing carries the venue and artist names for each show.
///
/// Expected: Ok with denormalized fields on every row
#[tokio::test]
async fn lists_shows_with_denormalized_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::VenueFactory::new(db)
        .name("Park Square Live Music & Coffee")
        .build()
        .await?;
    let artist = factory::artist::ArtistFactory::new(db)
        .name("The Wild Sax Band")
        .build()
        .await?;
    factory::show::create_show(db, artist.id, venue.id).await?;

    let service = ShowService::new(db);
    let listings = service.list_all().await.unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].venue_name, "Park Square Live Music & Coffee");
    assert_eq!(listings[0].artist_name, "The Wild Sax Band");

    Ok(())
}

/// Tests an empty shows table.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_when_no_shows_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ShowService::new(db);
    let listings = service.list_all().await.unwrap();

    assert!(listings.is_empty());

    Ok(())
}
