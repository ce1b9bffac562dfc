//! Command-line argument parsing and processing.
//!
//! The invocation surface is positional: `LATITUDE LONGITUDE` followed by the
//! optional sunrise and sunset offsets in minutes. Values are kept as strings
//! here; turning them into numbers is part of the estimate, so malformed numbers
//! degrade to seasonal defaults instead of failing the invocation.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::logger::Log;

#[derive(Debug, Parser)]
#[command(name = "followsun", version, about)]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(allow_negative_numbers = true)]
    latitude: Option<String>,

    /// Longitude in degrees, east positive
    #[arg(allow_negative_numbers = true)]
    longitude: Option<String>,

    /// Minutes added to sunrise
    #[arg(allow_negative_numbers = true)]
    sunrise_offset: Option<String>,

    /// Minutes added to sunset
    #[arg(allow_negative_numbers = true)]
    sunset_offset: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,

    /// Enable detailed debug output on stderr
    #[arg(short, long)]
    debug: bool,

    /// Skip the precise solar model and use the approximate calculation
    #[arg(long)]
    no_precise: bool,
}

/// Arguments for a normal estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub latitude: String,
    pub longitude: String,
    pub sunrise_offset: Option<String>,
    pub sunset_offset: Option<String>,
    pub debug_enabled: bool,
    pub no_precise: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Compute and print sunrise/sunset
    Run(RunArgs),
    /// Print pre-rendered help or version text and exit successfully
    ShowInfo(String),
    /// Print the usage line and exit with an error status
    ShowUsage,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments (including the program name) into an action.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                let action = match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        CliAction::ShowInfo(e.render().to_string())
                    }
                    _ => {
                        Log::log_error(e.render().to_string().trim_end());
                        CliAction::ShowUsage
                    }
                };
                return ParsedArgs { action };
            }
        };

        let (Some(latitude), Some(longitude)) = (cli.latitude, cli.longitude) else {
            return ParsedArgs {
                action: CliAction::ShowUsage,
            };
        };

        if !cli.extra.is_empty() {
            Log::log_warning(&format!(
                "Ignoring extra arguments: {}",
                cli.extra.join(" ")
            ));
        }

        ParsedArgs {
            action: CliAction::Run(RunArgs {
                latitude,
                longitude,
                sunrise_offset: cli.sunrise_offset,
                sunset_offset: cli.sunset_offset,
                debug_enabled: cli.debug,
                no_precise: cli.no_precise,
            }),
        }
    }

    /// Convenience method to parse from std::env::args_os()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args_os())
    }
}
