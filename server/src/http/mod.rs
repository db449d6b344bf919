pub mod battle;
pub mod game;
pub mod health;
pub mod pets;
pub mod routes;
pub mod shop;
