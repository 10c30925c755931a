use clap::{Parser, Subcommand};

use self::{sample_config::SampleConfigArg, search::SearchArg};

mod sample_config;
mod search;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Search for the best-scoring location with a genetic algorithm
    Search(#[clap(flatten)] SearchArg),
    /// Write the built-in sample criteria configuration as JSON
    SampleConfig(#[clap(flatten)] SampleConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Search(SearchArg::default())) {
        Mode::Search(arg) => search::run(&arg)?,
        Mode::SampleConfig(arg) => sample_config::run(&arg)?,
    }
    Ok(())
}
