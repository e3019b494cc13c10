pub mod client;
mod dto;
pub mod provider;

pub use client::AuthClient;
pub use provider::GoTrueAuthProvider;
