use super::*;

/// Tests that only shows starting strictly after the reference time count
/// as upcoming.
///
/// Expected: Ok(1), the past show and the show at the exact reference time
/// are excluded
#[tokio::test]
async fn counts_strictly_after_reference_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;
    let artist = factory::artist::create_artist(db).await?;
    let now = Utc::now();

    factory::show::ShowFactory::new(db, artist.id, venue.id)
        .start_time(now - Duration::days(1))
        .build()
        .await?;
    factory::show::ShowFactory::new(db, artist.id, venue.id)
        .start_time(now)
        .build()
        .await?;
    factory::show::ShowFactory::new(db, artist.id, venue.id)
        .start_time(now + Duration::days(1))
        .build()
        .await?;

    let repo = ShowRepository::new(db);
    let count = repo.count_upcoming_for_venue(venue.id, now).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that other venues' upcoming shows are not counted.
///
/// Expected: Ok(0) for a venue with no shows of its own
#[tokio::test]
async fn ignores_other_venues_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;
    let other_venue = factory::venue::create_venue(db).await?;
    let artist = factory::artist::create_artist(db).await?;

    factory::show::create_show(db, artist.id, other_venue.id).await?;

    let repo = ShowRepository::new(db);
    let count = repo.count_upcoming_for_venue(venue.id, Utc::now()).await?;

    assert_eq!(count, 0);

    Ok(())
}
