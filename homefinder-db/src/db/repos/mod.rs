//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues exactly one
//! parameterized statement per call:
//! - lookups return `Option<T>`, lists return `Vec<T>`
//! - deletes and updates use `RETURNING *` to hand back the affected row
//! - conflicts come from DB constraints (no check-then-insert)

pub mod admins;
pub mod favourites;
pub mod messages;
pub mod properties;
pub mod users;

pub use admins::{Admin, AdminRepo};
pub use favourites::{Favourite, FavouriteRepo};
pub use messages::{Message, MessageRepo, NewMessage};
pub use properties::{NewProperty, Property, PropertyRepo, PropertyWithOwner, LISTING_PAGE_LIMIT};
pub use users::{NewUser, User, UserRepo};
