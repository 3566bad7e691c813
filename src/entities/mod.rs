pub mod prelude;

pub mod artists;
pub mod categories;
pub mod questions;
pub mod shows;
pub mod venues;
