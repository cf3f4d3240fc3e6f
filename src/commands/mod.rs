pub mod check;
pub mod config;
pub mod parse;
pub mod watch;
