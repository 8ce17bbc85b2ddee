use super::*;

/// Tests that a queued flash message survives a lookup of a missing artist.
///
/// Expected: Err(AppError::NotFound) and the message still queued
#[tokio::test]
async fn keeps_queued_flash_when_artist_is_missing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let session = test.session().await.unwrap().clone();
    let db = test.db.as_ref().unwrap();

    let flash = FlashSession::new(&session);
    flash.push("Artist was successfully updated!").await.unwrap();

    let state = AppState::new(db.clone());
    let result = detail(State(state), session.clone(), Path(9999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let messages = flash.take().await.unwrap();
    assert_eq!(messages, vec!["Artist was successfully updated!".to_string()]);

    Ok(())
}
