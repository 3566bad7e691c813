pub mod schedule;

pub mod trivia_service;
pub use trivia_service::{TriviaError, TriviaService};

pub mod trivia_service_impl;
pub use trivia_service_impl::SeaOrmTriviaService;
