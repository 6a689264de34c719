//! alertmail - monitoring notification mailer
//!
//! Reads the monitoring daemon's environment macros and prints a raw HTML
//! email for piping into `sendmail -t` or similar.

use alertmail::{
    app::{self, AppError},
    cli::{Cli, Parsed},
    config::Config,
    core::PackageInfo,
    environment, updates,
};
use std::io::{self, IsTerminal};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Stdout carries the message; diagnostics must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Exit(code) => process::exit(code),
    };

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {}", err);
        process::exit(1);
    });

    init_logging(&config.log_level);

    if cli.updates {
        let code = match updates::check(&config.update_check, &PackageInfo::current()) {
            Ok(status) => {
                println!("{}", status);
                status.exit_code()
            }
            Err(e) => {
                error!("Update check failed: {:#}", e);
                updates::CHECK_FAILED_EXIT_CODE
            }
        };
        process::exit(code);
    }

    let vars = environment::process_vars();
    let stdout = io::stdout();
    match app::run(&cli, &config, &vars, &mut stdout.lock()) {
        Ok(()) => {}
        Err(err @ AppError::MissingRecipient(_)) => {
            eprintln!("error: {}\n", err);
            eprint!("{}", Cli::usage());
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
