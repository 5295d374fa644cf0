use std::process::ExitCode;

use clap::Parser;
use log::debug;
use mucat::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    debug!("{:?}", cli);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match mucat::run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
