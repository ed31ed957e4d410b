use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::SearchArgs;
use fileglob_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "fileglob",
    version,
    about = "Find files matching an Ant-style pattern and publish their metadata"
)]
pub struct Cli {
    #[command(flatten)]
    pub search: SearchArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(logging::parse_level(cli.search.log_level.as_deref())).ok();

    commands::search::run(cli.search)
}
