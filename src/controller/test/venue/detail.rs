use super::*;

/// Tests that a queued flash message survives a lookup of a missing venue.
///
/// A message queued by a prior request must still be delivered on the next
/// page that renders, even if the detail lookup in between 404s.
///
/// Expected: Err(AppError::NotFound) and the message still queued
#[tokio::test]
async fn keeps_queued_flash_when_venue_is_missing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let session = test.session().await.unwrap().clone();
    let db = test.db.as_ref().unwrap();

    let flash = FlashSession::new(&session);
    flash.push("Venue deleted!").await.unwrap();

    let state = AppState::new(db.clone());
    let result = detail(State(state), session.clone(), Path(9999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let messages = flash.take().await.unwrap();
    assert_eq!(messages, vec!["Venue deleted!".to_string()]);

    Ok(())
}

/// Tests that rendering the detail page drains the queued flash messages.
///
/// Expected: Ok response and an empty queue afterwards
#[tokio::test]
async fn drains_flash_when_detail_renders() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let session = test.session().await.unwrap().clone();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;

    let flash = FlashSession::new(&session);
    flash.push("Venue was successfully updated!").await.unwrap();

    let state = AppState::new(db.clone());
    let result = detail(State(state), session.clone(), Path(venue.id)).await;

    assert!(result.is_ok());

    let messages = flash.take().await.unwrap();
    assert!(messages.is_empty());

    Ok(())
}
