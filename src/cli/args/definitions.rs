use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use wiki_settings::{LoadOptions, Overrides};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `wiki-settings` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wiki-settings",
    version,
    long_version = long_version(),
    about = "Load, validate and print wiki host settings",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "WIKI_SETTINGS_CONFIG",
        action = ArgAction::Append,
        help = "Additional settings file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default settings files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "no-env",
        help = "Ignore WIKI_SETTINGS__* environment variables (default: disabled)"
    )]
    pub(crate) no_env: bool,
    #[arg(
        short = 'j',
        long = "job-run-rate",
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Jobs to run per request, 0 for an external runner (default: 1)"
    )]
    pub(crate) job_run_rate: Option<i64>,
    #[arg(
        long,
        value_name = "ZONE",
        help = "IANA timezone for the wiki (default: disabled)"
    )]
    pub(crate) timezone: Option<String>,
    #[arg(
        long,
        value_name = "CODE",
        help = "Default interface language for new accounts (default: disabled)"
    )]
    pub(crate) language: Option<String>,
    #[arg(
        long = "extensions",
        value_delimiter = ',',
        value_name = "EXT",
        help = "Comma-separated upload extensions (default: png,gif,jpg,jpeg,webp)"
    )]
    pub(crate) extensions: Option<Vec<String>>,
    #[arg(
        long = "memcached-servers",
        value_delimiter = ',',
        value_name = "HOST:PORT",
        help = "Comma-separated memcached endpoints (default: none)"
    )]
    pub(crate) memcached_servers: Option<Vec<String>>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print a summary of the resolved settings (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long = "check",
        help = "Validate the settings and exit without printing the table (default: disabled)"
    )]
    pub(crate) check: bool,
    #[arg(
        long = "apply-timezone",
        help = "Export the configured timezone as TZ (default: disabled)"
    )]
    pub(crate) apply_timezone: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the settings table"
    )]
    pub(crate) output: OutputFormat,
    #[arg(short, long, help = "Enable debug logging (default: disabled)")]
    pub(crate) verbose: bool,
}

impl CliArgs {
    /// Translate the parsed flags into loader inputs.
    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_files: self.config.clone(),
            no_config: self.no_config,
            environment: !self.no_env,
            overrides: Overrides {
                job_run_rate: self.job_run_rate,
                timezone: self.timezone.clone(),
                language: self.language.clone(),
                file_extensions: self.extensions.clone(),
                memcached_servers: self.memcached_servers.clone(),
            },
        }
    }
}
