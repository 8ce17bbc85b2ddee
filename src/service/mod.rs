//! Business logic layer sitting between controllers and repositories.
//!
//! Services compose repository calls into the aggregates the pages render:
//! the grouped venue listing, detail pages with shows partitioned around
//! now, and the denormalized show listing.

pub mod artist;
pub mod show;
pub mod venue;
