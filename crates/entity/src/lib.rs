//! Entity definitions for the Warren score backend.
//!
//! Sea-ORM entity definitions for the database models.

pub mod game_results;
pub mod users;

pub use game_results::Entity as GameResults;
pub use users::Entity as Users;
