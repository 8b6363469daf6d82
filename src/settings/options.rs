use std::path::PathBuf;

/// Inputs controlling where settings are read from.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Additional files merged after the default locations; each must exist.
    pub config_files: Vec<PathBuf>,
    /// Skip the default file locations entirely.
    pub no_config: bool,
    /// Read `WIKI_SETTINGS__*` environment variables.
    pub environment: bool,
    pub overrides: Overrides,
}

impl LoadOptions {
    /// Default locations, environment variables, no overrides.
    pub fn new() -> Self {
        Self {
            environment: true,
            ..Self::default()
        }
    }
}

/// Values supplied on the command line, applied after every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub job_run_rate: Option<i64>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub file_extensions: Option<Vec<String>>,
    pub memcached_servers: Option<Vec<String>>,
}

/// CLI flag names, used to attribute invalid values to their origin.
pub(crate) mod flags {
    pub const JOB_RUN_RATE: &str = "--job-run-rate";
    pub const TIMEZONE: &str = "--timezone";
    pub const LANGUAGE: &str = "--language";
    pub const FILE_EXTENSIONS: &str = "--extensions";
    pub const MEMCACHED_SERVERS: &str = "--memcached-servers";
}
