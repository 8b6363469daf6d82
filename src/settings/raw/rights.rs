use serde::Deserialize;
use url::Url;

use super::super::util::non_empty;
use crate::settings::RightsSettings;
use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};

/// Licensing strings. An empty value means unset, matching the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RightsSection {
    pub(super) page: Option<String>,
    pub(super) url: Option<String>,
    pub(super) text: Option<String>,
    pub(super) icon: Option<String>,
}

impl RightsSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<RightsSettings, ConfigError> {
        let url = non_empty(self.url);
        if let Some(value) = &url {
            check_url(keys::RIGHTS_URL, value, false, sources)?;
        }

        let icon = non_empty(self.icon);
        if let Some(value) = &icon {
            check_url(keys::RIGHTS_ICON, value, true, sources)?;
        }

        Ok(RightsSettings {
            page: non_empty(self.page),
            url,
            text: non_empty(self.text),
            icon,
        })
    }
}

/// Require an absolute URL, or a site-relative path when `allow_path` is set.
fn check_url(
    key: &'static str,
    value: &str,
    allow_path: bool,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if allow_path && value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }

    Url::parse(value)
        .map(|_| ())
        .map_err(|err| ConfigError::invalid(key, value, sources.source_for(key), err))
}
