pub mod health;
pub mod recipes;
pub mod server;
