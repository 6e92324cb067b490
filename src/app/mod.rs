pub mod calc;
pub mod config;
pub mod logging;
pub mod report;
pub mod utils;

pub use config::{Cli, Config, LogFormat, OutputFormat};
