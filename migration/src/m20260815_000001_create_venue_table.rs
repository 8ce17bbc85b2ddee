use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(string(Venue::Name))
                    .col(string(Venue::City))
                    .col(string(Venue::State))
                    .col(string(Venue::Address))
                    .col(string_null(Venue::Phone))
                    .col(string_null(Venue::ImageLink))
                    .col(string_null(Venue::FacebookLink))
                    .col(string_null(Venue::Website))
                    .col(json_null(Venue::Genres))
                    .col(boolean(Venue::SeekingTalent).default(false))
                    .col(text_null(Venue::SeekingDescription))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Name,
    City,
    State,
    Address,
    Phone,
    ImageLink,
    FacebookLink,
    Website,
    Genres,
    SeekingTalent,
    SeekingDescription,
}
