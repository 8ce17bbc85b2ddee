use super::*;

/// Tests creating an artist with every field populated.
///
/// Expected: Ok with all fields persisted, including the genres list
#[tokio::test]
async fn creates_artist_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let artist = repo
        .create(CreateArtistParams {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            image_link: Some("https://example.com/guns-n-petals.jpg".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform at.".to_string()),
        })
        .await?;

    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.phone, "326-123-5000");
    assert_eq!(artist.genres, vec!["Rock n Roll".to_string()]);
    assert!(artist.seeking_venue);

    // Verify the row exists in the database
    let db_artist = entity::prelude::Artist::find_by_id(artist.id)
        .one(db)
        .await?;
    assert!(db_artist.is_some());
    assert_eq!(db_artist.unwrap().name, "Guns N Petals");

    Ok(())
}

/// Tests creating an artist with optional fields left empty.
///
/// Expected: Ok with optional links stored as None
#[tokio::test]
async fn creates_artist_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let artist = repo
        .create(CreateArtistParams {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            genres: vec!["Jazz".to_string(), "Classical".to_string()],
            image_link: None,
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
        })
        .await?;

    assert!(artist.image_link.is_none());
    assert!(artist.facebook_link.is_none());
    assert!(!artist.seeking_venue);
    assert!(artist.seeking_description.is_none());

    Ok(())
}
