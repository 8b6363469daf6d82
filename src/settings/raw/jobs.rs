use serde::Deserialize;

use super::integer::IntegerValue;
use crate::settings::JobSettings;
use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct JobsSection {
    pub(super) run_rate: Option<IntegerValue>,
}

impl JobsSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<JobSettings, ConfigError> {
        let Some(value) = self.run_rate else {
            return Ok(JobSettings::default());
        };

        let rate = value.resolve(keys::JOB_RUN_RATE, sources)?;
        let run_rate = u32::try_from(rate).map_err(|_| {
            ConfigError::invalid(
                keys::JOB_RUN_RATE,
                rate.to_string(),
                sources.source_for(keys::JOB_RUN_RATE),
                format!("must be between 0 and {}", u32::MAX),
            )
        })?;

        Ok(JobSettings { run_rate })
    }
}
