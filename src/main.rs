use clap::Parser;
use names2stats::names::stdin_names;
use names2stats::{logging, stats_to_stdout, Cli, Config, StatError};
use std::process::ExitCode;
use tracing::error;

fn run(cli: Cli) -> Result<usize, StatError> {
    let config = Config::from_cli(cli)?;
    stats_to_stdout(&config.root, stdin_names())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = ?e.kind(), "{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
