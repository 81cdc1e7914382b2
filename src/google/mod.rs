mod client;
pub mod models;
pub mod token;

pub use client::CalendarClient;
pub use token::TokenManager;
