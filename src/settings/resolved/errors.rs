use thiserror::Error;

use super::SettingSource;

/// A setting value that failed validation, together with where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub origin: SettingSource,
    pub reason: String,
}

impl ConfigError {
    pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
    where
        V: Into<String>,
        R: ToString,
    {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.to_string(),
        }
    }
}
