mod args;
mod cli;

pub(crate) use args::Cli;
pub(crate) use cli::{as_cli, print_usage};
