//! fanout: batch compute service.

use std::process::ExitCode;

use fanout_cli::presenter::CLIResultPresenter;
use fanout_core::constants::exit_codes;
use fanout_lib::{app, config, errors};
use fanout_orchestration::interfaces::ResultPresenter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // RUST_LOG wins over --log and the mode default. Logs go to stderr so
    // quiet output on stdout stays machine-readable.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = match app::run(&config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
