use serde::Deserialize;

use crate::settings::CacheSettings;
use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::types::{CacheBackend, Endpoint};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct CacheSection {
    pub(super) main: Option<String>,
    pub(super) parser: Option<String>,
    pub(super) message: Option<String>,
    pub(super) memcached_servers: Option<Vec<String>>,
}

impl CacheSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<CacheSettings, ConfigError> {
        let defaults = CacheSettings::default();

        let memcached_servers = self
            .memcached_servers
            .unwrap_or_default()
            .iter()
            .filter(|server| !server.trim().is_empty())
            .map(|server| {
                server.parse::<Endpoint>().map_err(|err| {
                    ConfigError::invalid(
                        keys::MEMCACHED_SERVERS,
                        server.as_str(),
                        sources.source_for(keys::MEMCACHED_SERVERS),
                        err,
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CacheSettings {
            main: backend(self.main, keys::MAIN_CACHE, defaults.main, sources)?,
            parser: backend(self.parser, keys::PARSER_CACHE, defaults.parser, sources)?,
            message: backend(self.message, keys::MESSAGE_CACHE, defaults.message, sources)?,
            memcached_servers,
        })
    }
}

fn backend(
    value: Option<String>,
    key: &'static str,
    default: CacheBackend,
    sources: &ConfigSources,
) -> Result<CacheBackend, ConfigError> {
    match value {
        None => Ok(default),
        Some(name) => name
            .parse()
            .map_err(|err| ConfigError::invalid(key, name.as_str(), sources.source_for(key), err)),
    }
}
