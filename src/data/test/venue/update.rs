use super::*;

/// Tests that updating a venue reassigns every field from the form.
///
/// Expected: Ok with all fields changed, including fields cleared to None
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::venue::VenueFactory::new(db)
        .name("Old Name")
        .city("San Francisco")
        .phone(Some("415-555-1234".to_string()))
        .seeking_talent(true)
        .seeking_description(Some("Old description".to_string()))
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(UpdateVenueParams {
            id: created.id,
            name: "New Name".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "42 Broadway".to_string(),
            phone: None,
            image_link: Some("https://example.com/new.jpg".to_string()),
            facebook_link: None,
            website: Some("https://example.com".to_string()),
            genres: vec!["Blues".to_string()],
            seeking_talent: false,
            seeking_description: None,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "New York");
    assert_eq!(updated.state, "NY");
    assert_eq!(updated.address, "42 Broadway");
    assert!(updated.phone.is_none());
    assert_eq!(updated.genres, vec!["Blues".to_string()]);
    assert!(!updated.seeking_talent);
    assert!(updated.seeking_description.is_none());

    // Verify the change persisted
    let db_venue = entity::prelude::Venue::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_venue.name, "New Name");
    assert!(db_venue.phone.is_none());

    Ok(())
}

/// Tests updating a venue that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let result = repo
        .update(UpdateVenueParams {
            id: 9999,
            name: "Ghost Venue".to_string(),
            city: "Nowhere".to_string(),
            state: "NA".to_string(),
            address: "0 Null St".to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            genres: vec![],
            seeking_talent: false,
            seeking_description: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
