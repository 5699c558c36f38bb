//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so signatures
//! elsewhere don't have to spell out the entity module paths.

/// A registered user.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name given at signup
/// - `email` - Unique login identifier, also the access token subject
/// - `password` - bcrypt hash of the user's password
pub type UserModel = entity::user::Model;

/// A character in the catalog; `name` is unique.
pub type CharacterModel = entity::character::Model;

/// A planet in the catalog; `name` is unique.
pub type PlanetModel = entity::planet::Model;

/// A vehicle in the catalog; `name` is unique.
pub type VehicleModel = entity::vehicle::Model;

/// A user's favourite.
///
/// # Fields (from `entity::favourite::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user
/// - `url` - Client supplied link to the favourited entry
/// - `character_id` / `planet_id` / `vehicle_id` - Exactly one is set, naming the target
pub type FavouriteModel = entity::favourite::Model;
