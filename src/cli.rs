//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. The template directory override is also exposed as a figment
//! provider so it layers on top of the configuration file and environment.

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Format monitoring notifications from the environment into raw HTML email.
///
/// Pipe the output into a mailer that reads a full message on stdin,
/// e.g. `alertmail | sendmail -t`.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, disable_version_flag = true)]
pub struct Cli {
    /// Recipient address [default: $NAGIOS_CONTACTEMAIL].
    #[arg(short, long, value_name = "EMAIL")]
    pub address: Option<String>,

    /// Subject line, overriding the one derived from the alert type.
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// Directory searched for `<type>.html.hbs` Handlebars templates before the builtin
    /// ones; set `template_extension` in the config for other names, e.g. `html.ejs`.
    #[arg(short, long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Check the registry for a newer release and exit.
    #[arg(short, long)]
    pub updates: bool,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print version information and exit.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Extra arguments, passed through to templates as `args`.
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// The result of parsing the process arguments.
#[derive(Debug)]
pub enum Parsed {
    /// Normal invocation; carry on with the notification.
    Run(Cli),
    /// Help, version or a usage error was already printed; exit with this code.
    Exit(i32),
}

impl Cli {
    /// Parses the given arguments, printing help, version and usage errors.
    ///
    /// Help and version go to stdout and yield exit code 0. Any other parse
    /// failure prints clap's message with usage to stderr and yields 1.
    pub fn parse_args<I, T>(args: I) -> Parsed
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Parsed::Run(cli),
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                // Printing can only fail if the stream is closed, and we exit either way.
                let _ = err.print();
                Parsed::Exit(code)
            }
        }
    }

    /// Renders the full help text, used when the recipient is missing.
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(dir) = &self.template_dir {
            dict.insert(
                "template_dir".into(),
                Value::from(dir.display().to_string()),
            );
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
