//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a show together with the venue and artist it references.
///
/// Convenience method for tests that only need one booking and do not care
/// about the specifics of the venue or artist. All entities are created with
/// default values; use the individual factories for customization.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((venue, artist, show))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_show_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::venue::Model,
        entity::artist::Model,
        entity::show::Model,
    ),
    DbErr,
> {
    let venue = crate::factory::venue::create_venue(db).await?;
    let artist = crate::factory::artist::create_artist(db).await?;
    let show = crate::factory::show::create_show(db, artist.id, venue.id).await?;

    Ok((venue, artist, show))
}
