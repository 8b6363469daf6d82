use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use super::super::util::is_enabled;
use crate::settings::LocaleSettings;
use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::types::{LanguageCode, LocalTimezone};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct LocaleSection {
    pub(super) enabled: Option<bool>,
    pub(super) timezone: Option<String>,
    pub(super) language: Option<String>,
}

impl LocaleSection {
    pub(super) fn resolve(
        self,
        sources: &ConfigSources,
        now: DateTime<Utc>,
    ) -> Result<LocaleSettings, ConfigError> {
        if !is_enabled(self.enabled) {
            warn!(key = keys::LOCALE_ENABLED, "locale section present but disabled");
            return Ok(LocaleSettings::default());
        }

        let timezone = self
            .timezone
            .map(|name| {
                LocalTimezone::parse_at(&name, now).map_err(|err| {
                    ConfigError::invalid(keys::TIMEZONE, name.as_str(), sources.source_for(keys::TIMEZONE), err)
                })
            })
            .transpose()?;

        let language = self
            .language
            .map(|code| {
                code.parse::<LanguageCode>().map_err(|err| {
                    ConfigError::invalid(keys::LANGUAGE, code.as_str(), sources.source_for(keys::LANGUAGE), err)
                })
            })
            .transpose()?;

        Ok(LocaleSettings { timezone, language })
    }
}
