pub mod catalog;
pub mod logic;
pub mod progression;
pub mod rng;
pub mod session;
pub mod types;
