pub mod args;
pub mod commands;
pub mod feed;
mod handlers;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
