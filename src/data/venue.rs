use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::genres_to_json;
use crate::model::venue::{CreateVenueParams, UpdateVenueParams, Venue};

/// Repository providing database operations for venue management.
pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new venue.
    ///
    /// # Arguments
    /// - `params` - Create parameters bound from the submitted venue form
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, DbErr> {
        let entity = entity::venue::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            image_link: ActiveValue::Set(params.image_link),
            facebook_link: ActiveValue::Set(params.facebook_link),
            website: ActiveValue::Set(params.website),
            genres: ActiveValue::Set(Some(genres_to_json(&params.genres))),
            seeking_talent: ActiveValue::Set(params.seeking_talent),
            seeking_description: ActiveValue::Set(params.seeking_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Venue::from_entity(entity))
    }

    /// Gets a venue by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The venue
    /// - `Ok(None)` - No venue exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Venue>, DbErr> {
        let entity = entity::prelude::Venue::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Venue::from_entity))
    }

    /// Gets all venues, ordered by city then name for stable grouping.
    pub async fn get_all(&self) -> Result<Vec<Venue>, DbErr> {
        let entities = entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::City)
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    /// Searches venues by case-insensitive substring match on name.
    ///
    /// The comparison lowercases both sides so it is case-insensitive
    /// regardless of database collation.
    ///
    /// # Arguments
    /// - `term` - Non-empty search term; empty-term rejection happens in the
    ///   controller before any query is issued
    ///
    /// # Returns
    /// - `Ok(venues)` - Venues whose names contain the term
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, DbErr> {
        let pattern = format!("%{}%", term.to_lowercase());
        let entities = entity::prelude::Venue::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::venue::Entity,
                    entity::venue::Column::Name,
                ))))
                .like(pattern),
            )
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    /// Updates a venue.
    ///
    /// Reassigns every field from the submitted form; each assignment is an
    /// independent statement.
    ///
    /// # Returns
    /// - `Ok(Venue)` - The updated venue
    /// - `Err(DbErr::RecordNotFound)` - No venue exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, params: UpdateVenueParams) -> Result<Venue, DbErr> {
        let venue = entity::prelude::Venue::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Venue with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::venue::ActiveModel = venue.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.city = ActiveValue::Set(params.city);
        active_model.state = ActiveValue::Set(params.state);
        active_model.address = ActiveValue::Set(params.address);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.image_link = ActiveValue::Set(params.image_link);
        active_model.facebook_link = ActiveValue::Set(params.facebook_link);
        active_model.website = ActiveValue::Set(params.website);
        active_model.genres = ActiveValue::Set(Some(genres_to_json(&params.genres)));
        active_model.seeking_talent = ActiveValue::Set(params.seeking_talent);
        active_model.seeking_description = ActiveValue::Set(params.seeking_description);

        let entity = active_model.update(self.db).await?;

        Ok(Venue::from_entity(entity))
    }

    /// Deletes a venue by ID.
    ///
    /// The venue's shows are removed by the cascade foreign key. Deleting a
    /// venue that does not exist is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Venue::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
