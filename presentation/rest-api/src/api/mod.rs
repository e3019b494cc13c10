pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod menu;
pub mod order;
pub mod security;
pub mod tags;
