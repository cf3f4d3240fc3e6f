pub mod binding;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod platform;

pub use duration::{Duration, format_canonical, format_suggestion, parse};
pub use error::ParseError;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
