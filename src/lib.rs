//! Fetch a League of Legends player's ranked match history from the Riot API
//! and save one flattened row per match to a CSV file.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod riot;
pub mod table;

pub use collector::{Collected, Collector, Query, run};
pub use config::Config;
pub use error::AppError;
