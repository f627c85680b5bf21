// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod notify;
pub mod sprint;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{RedmineClient, Tracker};
pub use config::{load_settings, Settings};
pub use error::{RedmanError, RedmanResult};
pub use models::*;
