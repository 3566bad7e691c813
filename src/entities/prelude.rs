pub use super::artists::Entity as Artists;
pub use super::categories::Entity as Categories;
pub use super::questions::Entity as Questions;
pub use super::shows::Entity as Shows;
pub use super::venues::Entity as Venues;
