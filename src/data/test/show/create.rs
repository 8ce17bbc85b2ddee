use super::*;

/// Tests creating a show between an existing artist and venue.
///
/// Expected: Ok with the booking persisted
#[tokio::test]
async fn creates_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;
    let artist = factory::artist::create_artist(db).await?;
    let start_time = Utc::now() + Duration::days(7);

    let repo = ShowRepository::new(db);
    let show = repo
        .create(CreateShowParams {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time,
        })
        .await?;

    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.start_time, start_time);

    // Verify the row exists in the database
    let db_show = entity::prelude::Show::find_by_id(show.id).one(db).await?;
    assert!(db_show.is_some());

    Ok(())
}

/// Tests creating a show referencing an artist that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;

    let repo = ShowRepository::new(db);
    let result = repo
        .create(CreateShowParams {
            artist_id: 9999,
            venue_id: venue.id,
            start_time: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
