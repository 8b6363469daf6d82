//! Resolve the configuration directory for `wiki-settings`.
//!
//! The helper respects an environment override while falling back to the
//! platform-appropriate location provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "wiki";
const APPLICATION: &str = "wiki-settings";

const CONFIG_DIR_ENV: &str = "WIKI_SETTINGS_CONFIG_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for wiki-settings"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Return the directory holding the default `settings.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_override_is_ignored() {
        assert_eq!(dir_from_env("WIKI_SETTINGS_TEST_UNSET_DIR"), None);
    }

    #[test]
    fn config_dir_mentions_application() {
        if env::var_os(CONFIG_DIR_ENV).is_some() {
            return;
        }
        if let Ok(dir) = get_config_dir() {
            assert!(dir.to_string_lossy().contains("wiki-settings"));
        }
    }
}
