use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use tracing::debug;

use super::keys;
use super::options::LoadOptions;
use crate::app_dirs;

/// Build a [`Config`] instance by combining default locations with explicit files
/// and the environment.
pub(super) fn build_config(options: &LoadOptions) -> Result<Config> {
    let mut builder = Config::builder();

    if !options.no_config {
        for path in default_config_files() {
            debug!(path = %path.display(), "considering default settings file");
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &options.config_files {
        debug!(path = %path.display(), "adding settings file");
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    if options.environment {
        builder = builder.add_source(
            Environment::with_prefix(keys::ENV_PREFIX)
                .separator(keys::ENV_SEPARATOR)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key(keys::FILE_EXTENSIONS)
                .with_list_parse_key(keys::MEMCACHED_SERVERS),
        );
    }

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => anyhow!("failed to read settings: {other}"),
    })
}

/// Discover the default settings file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("settings.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".wiki-settings.toml"));
        files.push(current_dir.join("wiki-settings.toml"));
    }

    files
}
