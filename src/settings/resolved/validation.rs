use super::{ConfigError, ConfigSources, Settings};
use crate::settings::keys;

/// Checks that span more than one section.
pub(super) fn validate(settings: &Settings, sources: &ConfigSources) -> Result<(), ConfigError> {
    if settings.cache.uses_memcached() && settings.cache.memcached_servers.is_empty() {
        return Err(ConfigError::invalid(
            keys::MEMCACHED_SERVERS,
            "[]",
            sources.source_for(keys::MEMCACHED_SERVERS),
            "at least one server is required when a cache uses memcached",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{CacheSettings, SettingSource};
    use super::*;
    use crate::types::CacheBackend;

    #[test]
    fn memcached_without_servers_is_rejected() {
        let settings = Settings {
            cache: CacheSettings {
                parser: CacheBackend::Memcached,
                ..CacheSettings::default()
            },
            ..Settings::default()
        };

        let err = validate(&settings, &ConfigSources::default()).unwrap_err();
        assert_eq!(err.key, keys::MEMCACHED_SERVERS);
        assert_eq!(err.origin, SettingSource::ConfigKey(keys::MEMCACHED_SERVERS));
        assert!(err.to_string().contains("at least one server"));
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(validate(&Settings::default(), &ConfigSources::default()).is_ok());
    }
}
