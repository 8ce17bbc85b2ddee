use super::*;

/// Tests that an artist's shows are partitioned into past and upcoming.
///
/// Expected: Ok(Some) with the future show under upcoming and the past show
/// under past, with matching counts
#[tokio::test]
async fn partitions_shows_around_now() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::VenueFactory::new(db)
        .name("The Musical Hop")
        .build()
        .await?;
    let artist = factory::artist::create_artist(db).await?;

    let past_time = Utc::now() - Duration::days(30);
    let future_time = Utc::now() + Duration::days(30);
    factory::show::ShowFactory::new(db, artist.id, venue.id)
        .start_time(past_time)
        .build()
        .await?;
    factory::show::ShowFactory::new(db, artist.id, venue.id)
        .start_time(future_time)
        .build()
        .await?;

    let service = ArtistService::new(db);
    let details = service.get_details(artist.id).await.unwrap().unwrap();

    assert_eq!(details.past_shows_count, 1);
    assert_eq!(details.upcoming_shows_count, 1);
    assert_eq!(details.past_shows[0].start_time, past_time);
    assert_eq!(details.past_shows[0].venue_name, "The Musical Hop");
    assert_eq!(details.upcoming_shows[0].start_time, future_time);

    Ok(())
}

/// Tests an artist with no shows at all.
///
/// Expected: Ok(Some) with empty partitions and zero counts
#[tokio::test]
async fn returns_empty_partitions_for_artist_without_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::ArtistFactory::new(db)
        .name("Matt Quevedo")
        .build()
        .await?;

    let service = ArtistService::new(db);
    let details = service.get_details(artist.id).await.unwrap().unwrap();

    assert_eq!(details.artist.name, "Matt Quevedo");
    assert_eq!(details.past_shows_count, 0);
    assert_eq!(details.upcoming_shows_count, 0);

    Ok(())
}

/// Tests an artist ID with no matching row.
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

    let service = ArtistService::new(db);
    let details = service.get_details(9999).await.unwrap();

    assert!(details.is_none());

    Ok(())
}
