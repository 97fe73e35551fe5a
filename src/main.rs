use clap::Parser;
use std::process::ExitCode;

use roundscore::RoundscoreError;
use roundscore::cli::Cli;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<(), RoundscoreError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = roundscore::config::load_config()?;
    roundscore::run::handle_run(&cli, &config)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("roundscore: {e}");
            ExitCode::from(1)
        }
    }
}
