pub mod artist;
pub mod listing;
pub mod show;
pub mod trivia;
pub mod venue;
