pub mod agenda;
pub mod config;
pub mod error;
pub mod google;
pub mod startup;
