use super::*;

/// Tests that the show listing denormalizes both the venue and artist sides.
///
/// Expected: Ok with names and artist image link filled in on each row
#[tokio::test]
async fn returns_rows_with_both_sides_denormalized() -> Result<(), DbErr> {
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
        .image_link(Some("https://example.com/sax.jpg".to_string()))
        .build()
        .await?;
    let show = factory::show::create_show(db, artist.id, venue.id).await?;

    let repo = ShowRepository::new(db);
    let listings = repo.get_all_with_details().await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].venue_id, venue.id);
    assert_eq!(listings[0].venue_name, "Park Square Live Music & Coffee");
    assert_eq!(listings[0].artist_id, artist.id);
    assert_eq!(listings[0].artist_name, "The Wild Sax Band");
    assert_eq!(
        listings[0].artist_image_link,
        Some("https://example.com/sax.jpg".to_string())
    );
    assert_eq!(listings[0].start_time, show.start_time);

    Ok(())
}

/// Tests that the listing covers all shows ordered by start time.
///
/// Expected: Ok with every booking present, earliest first
#[tokio::test]
async fn orders_all_shows_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;
    let artist_a = factory::artist::create_artist(db).await?;
    let artist_b = factory::artist::create_artist(db).await?;

    let now = Utc::now();
    factory::show::ShowFactory::new(db, artist_a.id, venue.id)
        .start_time(now + Duration::days(3))
        .build()
        .await?;
    factory::show::ShowFactory::new(db, artist_b.id, venue.id)
        .start_time(now + Duration::days(1))
        .build()
        .await?;

    let repo = ShowRepository::new(db);
    let listings = repo.get_all_with_details().await?;

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].artist_id, artist_b.id);
    assert_eq!(listings[1].artist_id, artist_a.id);

    Ok(())
}

/// Tests an empty shows table.
///
/// Expected: Ok with an empty result set
#[tokio::test]
async fn returns_empty_when_no_shows_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShowRepository::new(db);
    let listings = repo.get_all_with_details().await?;

    assert!(listings.is_empty());

    Ok(())
}
