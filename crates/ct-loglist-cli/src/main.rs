//! `ctloglist` binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use ct_loglist::{HttpFileSource, LogListProvider};
use tracing_subscriber::EnvFilter;

use ct_loglist_cli::cli::{Cli, Commands};
use ct_loglist_cli::commands::{ListCommand, ShowCommand};
use ct_loglist_cli::{CliError, OutputFormat};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let format = OutputFormat::new(cli.format);
    let provider = LogListProvider::new(HttpFileSource::new(cli.config()));
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::List => {
            let cmd = ListCommand::new(provider, cli.download);
            cmd.execute(&mut stdout, &format)?;
        }
        Commands::Show { id } => {
            let cmd = ShowCommand::new(provider, cli.download);
            cmd.execute(&mut stdout, &format, id)?;
        }
    }

    Ok(())
}
