use std::collections::BTreeMap;
use std::env;
use std::fmt;

use crate::settings::keys;

/// Where an individual setting value was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    CliFlag(&'static str),
    Environment(String),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Tracks which keys were overridden on the command line and whether the
/// environment participated in the merge.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    cli_flags: BTreeMap<&'static str, &'static str>,
    environment: bool,
}

impl ConfigSources {
    pub(crate) fn new(environment: bool) -> Self {
        Self {
            cli_flags: BTreeMap::new(),
            environment,
        }
    }

    pub(crate) fn record_cli(&mut self, key: &'static str, flag: &'static str) {
        self.cli_flags.insert(key, flag);
    }

    /// Keys whose value came from a command line flag.
    pub(crate) fn overridden_keys(&self) -> Vec<&'static str> {
        self.cli_flags.keys().copied().collect()
    }

    /// Attribute `key` to the highest-precedence source that could have set it.
    pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
        if let Some(flag) = self.cli_flags.get(key) {
            return SettingSource::CliFlag(flag);
        }

        if self.environment {
            let var = keys::env_var(key);
            if env::var_os(&var).is_some() {
                return SettingSource::Environment(var);
            }
        }

        SettingSource::ConfigKey(key)
    }
}
