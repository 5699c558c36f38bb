pub use super::character::Entity as Character;
pub use super::favourite::Entity as Favourite;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
