use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::keys;
use super::options::{Overrides, flags};
use super::resolved::{ConfigSources, Settings};
use super::util::is_enabled;

mod cache;
mod email;
mod integer;
mod jobs;
mod locale;
mod rights;
mod uploads;

use cache::CacheSection;
use email::EmailSection;
use jobs::JobsSection;
use locale::LocaleSection;
use rights::RightsSection;
use uploads::UploadsSection;

/// Mirror of the settings file before overrides and validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RawConfig {
    jobs: JobsSection,
    email: EmailSection,
    cache: CacheSection,
    locale: LocaleSection,
    uploads: UploadsSection,
    rights: RightsSection,
}

impl RawConfig {
    /// Apply command line overrides on top of the merged file and environment values.
    pub(super) fn apply_overrides(&mut self, overrides: &Overrides, sources: &mut ConfigSources) {
        if let Some(rate) = overrides.job_run_rate {
            self.jobs.run_rate = Some(rate.into());
            sources.record_cli(keys::JOB_RUN_RATE, flags::JOB_RUN_RATE);
        }
        if (overrides.timezone.is_some() || overrides.language.is_some())
            && !is_enabled(self.locale.enabled)
        {
            // a flag re-enables a disabled locale block with only the flagged values
            self.locale = LocaleSection {
                enabled: Some(true),
                ..LocaleSection::default()
            };
        }
        if let Some(zone) = &overrides.timezone {
            self.locale.timezone = Some(zone.clone());
            sources.record_cli(keys::TIMEZONE, flags::TIMEZONE);
        }
        if let Some(language) = &overrides.language {
            self.locale.language = Some(language.clone());
            sources.record_cli(keys::LANGUAGE, flags::LANGUAGE);
        }
        if let Some(extensions) = &overrides.file_extensions {
            self.uploads.file_extensions = Some(extensions.clone());
            sources.record_cli(keys::FILE_EXTENSIONS, flags::FILE_EXTENSIONS);
        }
        if let Some(servers) = &overrides.memcached_servers {
            self.cache.memcached_servers = Some(servers.clone());
            sources.record_cli(keys::MEMCACHED_SERVERS, flags::MEMCACHED_SERVERS);
        }
    }

    /// Convert the raw values into [`Settings`], validating every section.
    ///
    /// `now` fixes the instant used to derive the timezone offset.
    pub(super) fn resolve(self, sources: &ConfigSources, now: DateTime<Utc>) -> Result<Settings> {
        let settings = Settings {
            jobs: self.jobs.resolve(sources)?,
            mail: self.email.resolve(sources)?,
            cache: self.cache.resolve(sources)?,
            locale: self.locale.resolve(sources, now)?,
            uploads: self.uploads.resolve(sources)?,
            rights: self.rights.resolve(sources)?,
        };

        settings.validate(sources).map_err(Error::new)?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests;
