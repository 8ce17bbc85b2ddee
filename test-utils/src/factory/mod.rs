//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let venue = factory::venue::create_venue(&db).await?;
//!     let artist = factory::artist::create_artist(&db).await?;
//!
//!     // Create a show with its venue and artist in one call
//!     let (venue, artist, show) = factory::helpers::create_show_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let venue = factory::venue::VenueFactory::new(&db)
//!     .name("The Musical Hop")
//!     .city("San Francisco")
//!     .state("CA")
//!     .build()
//!     .await?;
//! ```

pub mod artist;
pub mod helpers;
pub mod show;
pub mod venue;

// Re-export commonly used factory functions for concise usage
pub use artist::create_artist;
pub use show::create_show;
pub use venue::create_venue;
