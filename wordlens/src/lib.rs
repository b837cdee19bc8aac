//! Command-line front end for `wordlens-core`.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

pub mod app;
pub mod config;
mod error;
pub mod render;
pub mod telemetry;

pub use app::App;
pub use config::Config;
pub use error::Error;
