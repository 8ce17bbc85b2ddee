pub use super::{artist::Entity as Artist, show::Entity as Show, venue::Entity as Venue};
