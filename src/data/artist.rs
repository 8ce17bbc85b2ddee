use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::artist::{Artist, CreateArtistParams, UpdateArtistParams};
use crate::model::genres_to_json;

/// Repository providing database operations for artist management.
pub struct ArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new artist.
    ///
    /// # Returns
    /// - `Ok(Artist)` - The created artist with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateArtistParams) -> Result<Artist, DbErr> {
        let entity = entity::artist::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            phone: ActiveValue::Set(params.phone),
            genres: ActiveValue::Set(genres_to_json(&params.genres)),
            image_link: ActiveValue::Set(params.image_link),
            facebook_link: ActiveValue::Set(params.facebook_link),
            seeking_venue: ActiveValue::Set(params.seeking_venue),
            seeking_description: ActiveValue::Set(params.seeking_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Artist::from_entity(entity))
    }

    /// Gets an artist by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Artist))` - The artist
    /// - `Ok(None)` - No artist exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Artist>, DbErr> {
        let entity = entity::prelude::Artist::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Artist::from_entity))
    }

    /// Gets all artists, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Artist>, DbErr> {
        let entities = entity::prelude::Artist::find()
            .order_by_asc(entity::artist::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Artist::from_entity).collect())
    }

    /// Searches artists by case-insensitive substring match on name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, DbErr> {
        let pattern = format!("%{}%", term.to_lowercase());
        let entities = entity::prelude::Artist::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::artist::Entity,
                    entity::artist::Column::Name,
                ))))
                .like(pattern),
            )
            .order_by_asc(entity::artist::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Artist::from_entity).collect())
    }

    /// Updates an artist.
    ///
    /// Reassigns every field from the submitted form; each assignment is an
    /// independent statement.
    ///
    /// # Returns
    /// - `Ok(Artist)` - The updated artist
    /// - `Err(DbErr::RecordNotFound)` - No artist exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, params: UpdateArtistParams) -> Result<Artist, DbErr> {
        let artist = entity::prelude::Artist::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Artist with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::artist::ActiveModel = artist.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.city = ActiveValue::Set(params.city);
        active_model.state = ActiveValue::Set(params.state);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.genres = ActiveValue::Set(genres_to_json(&params.genres));
        active_model.image_link = ActiveValue::Set(params.image_link);
        active_model.facebook_link = ActiveValue::Set(params.facebook_link);
        active_model.seeking_venue = ActiveValue::Set(params.seeking_venue);
        active_model.seeking_description = ActiveValue::Set(params.seeking_description);

        let entity = active_model.update(self.db).await?;

        Ok(Artist::from_entity(entity))
    }

    /// Deletes an artist by ID.
    ///
    /// The artist's shows are removed by the cascade foreign key. Deleting an
    /// artist that does not exist is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Artist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
