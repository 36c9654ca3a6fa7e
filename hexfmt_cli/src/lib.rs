mod cli;
mod input;

pub use cli::{run, CommandLineArguments};
pub use input::read_source;

pub type AppResult<T> = anyhow::Result<T>;
