mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, add, list, merge, remove};
use hostsctl_common::config::Config;
use hostsctl_common::error;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(cfg.quiet);

    match run(commands.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::List { json, pretty } => list::list(json, pretty, cfg),
        Commands::Add { ip, domain, comment } => add::add(&ip, &domain, comment.as_deref(), cfg),
        Commands::Remove { domain } => remove::remove(&domain, cfg),
        Commands::Merge => {
            print::header("merging duplicate addresses", cfg.quiet);
            merge::merge(cfg)
        }
    }
}
