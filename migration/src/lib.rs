pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_venue_table;
mod m20260815_000002_create_artist_table;
mod m20260815_000003_create_show_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_venue_table::Migration),
            Box::new(m20260815_000002_create_artist_table::Migration),
            Box::new(m20260815_000003_create_show_table::Migration),
        ]
    }
}
