use chrono::{TimeZone, Utc};

use super::RawConfig;
use crate::settings::keys;
use crate::settings::options::Overrides;
use crate::settings::resolved::{ConfigError, ConfigSources, SettingSource};
use crate::types::CacheBackend;

fn resolve(raw: RawConfig, sources: &ConfigSources) -> anyhow::Result<crate::settings::Settings> {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    raw.resolve(sources, now)
}

fn config_error(result: anyhow::Result<crate::settings::Settings>) -> ConfigError {
    result
        .unwrap_err()
        .downcast::<ConfigError>()
        .expect("config error")
}

#[test]
fn cli_overrides_take_precedence() {
    let mut raw = RawConfig::default();
    raw.jobs.run_rate = Some(5_i64.into());
    raw.locale.enabled = Some(false);
    raw.locale.timezone = Some("UTC".into());

    let overrides = Overrides {
        job_run_rate: Some(0),
        timezone: Some("Europe/Berlin".into()),
        language: Some("de".into()),
        file_extensions: Some(vec!["PNG".into(), "svg".into()]),
        memcached_servers: Some(vec!["10.0.0.5:11211".into()]),
    };
    let mut sources = ConfigSources::default();
    raw.apply_overrides(&overrides, &mut sources);

    let settings = resolve(raw, &sources).unwrap();
    assert_eq!(settings.jobs.run_rate, 0);
    assert_eq!(
        settings.locale.timezone.as_ref().map(|zone| zone.name()),
        Some("Europe/Berlin")
    );
    assert_eq!(
        settings.locale.language.as_ref().map(|code| code.as_str()),
        Some("de")
    );
    assert_eq!(settings.uploads.extensions(), ["png", "svg"]);
    assert_eq!(settings.cache.memcached_servers[0].to_string(), "10.0.0.5:11211");
}

#[test]
fn language_flag_does_not_revive_disabled_timezone() {
    let mut raw = RawConfig::default();
    raw.locale.enabled = Some(false);
    raw.locale.timezone = Some("Europe/Berlin".into());

    let overrides = Overrides {
        language: Some("fr".into()),
        ..Overrides::default()
    };
    let mut sources = ConfigSources::default();
    raw.apply_overrides(&overrides, &mut sources);

    let settings = resolve(raw, &sources).unwrap();
    assert_eq!(settings.locale.timezone, None);
    assert_eq!(
        settings.locale.language.as_ref().map(|code| code.as_str()),
        Some("fr")
    );
}

#[test]
fn invalid_override_is_attributed_to_its_flag() {
    let mut raw = RawConfig::default();
    let overrides = Overrides {
        job_run_rate: Some(-1),
        ..Overrides::default()
    };
    let mut sources = ConfigSources::default();
    raw.apply_overrides(&overrides, &mut sources);

    let err = config_error(resolve(raw, &sources));
    assert_eq!(err.key, keys::JOB_RUN_RATE);
    assert_eq!(err.origin, SettingSource::CliFlag("--job-run-rate"));
    assert!(err.to_string().contains("value: -1"));
}

#[test]
fn disabled_sections_keep_features_off() {
    let mut raw = RawConfig::default();
    raw.email.enabled = Some(false);
    raw.email.emergency_contact = Some("admin@example.com".into());
    raw.locale.enabled = Some(false);
    raw.locale.timezone = Some("Europe/Berlin".into());
    raw.locale.language = Some("en".into());

    let settings = resolve(raw, &ConfigSources::default()).unwrap();
    assert_eq!(settings.mail.emergency_contact, None);
    assert_eq!(settings.locale.timezone, None);
    assert_eq!(settings.locale.language, None);
}

#[test]
fn enabled_but_empty_contact_is_malformed() {
    let mut raw = RawConfig::default();
    raw.email.emergency_contact = Some(String::new());

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::EMERGENCY_CONTACT);
    assert!(err.reason.contains("empty"));
}

#[test]
fn malformed_contact_address_is_rejected() {
    let mut raw = RawConfig::default();
    raw.email.emergency_contact = Some("not-an-address".into());

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::EMERGENCY_CONTACT);
    assert_eq!(err.value, "not-an-address");
    assert_eq!(err.origin, SettingSource::ConfigKey(keys::EMERGENCY_CONTACT));
}

#[test]
fn unknown_backend_names_the_cache_role() {
    let mut raw = RawConfig::default();
    raw.cache.message = Some("redis".into());

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::MESSAGE_CACHE);
    assert_eq!(err.value, "redis");
}

#[test]
fn memcached_roles_require_servers() {
    let mut raw = RawConfig::default();
    raw.cache.main = Some("memcached".into());

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::MEMCACHED_SERVERS);
}

#[test]
fn smtp_defaults_fill_port_and_identity_host() {
    let mut raw = RawConfig::default();
    raw.email.smtp = Some(super::email::SmtpSection {
        host: Some("mail.example.com".into()),
        ..Default::default()
    });

    let settings = resolve(raw, &ConfigSources::default()).unwrap();
    let relay = settings.mail.smtp.unwrap();
    assert_eq!(relay.port, 25);
    assert_eq!(relay.id_host, "mail.example.com");
    assert!(!relay.auth);
}

#[test]
fn smtp_auth_requires_credentials() {
    let mut raw = RawConfig::default();
    raw.email.smtp = Some(super::email::SmtpSection {
        host: Some("mail.example.com".into()),
        username: Some("wiki@example.com".into()),
        auth: Some(true),
        ..Default::default()
    });

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::SMTP_PASSWORD);
}

#[test]
fn smtp_without_host_is_rejected() {
    let mut raw = RawConfig::default();
    raw.email.smtp = Some(super::email::SmtpSection::default());

    let err = config_error(resolve(raw, &ConfigSources::default()));
    assert_eq!(err.key, keys::SMTP_HOST);
}

#[test]
fn disabled_smtp_falls_back_to_local_delivery() {
    let mut raw = RawConfig::default();
    raw.email.smtp = Some(super::email::SmtpSection {
        enabled: Some(false),
        port: Some((-1_i64).into()),
        ..Default::default()
    });

    let settings = resolve(raw, &ConfigSources::default()).unwrap();
    assert_eq!(settings.mail.smtp, None);
}

#[test]
fn rights_icon_accepts_site_paths() {
    let mut raw = RawConfig::default();
    raw.rights.icon = Some("/resources/assets/licenses/cc-by-sa.png".into());
    raw.rights.url = Some("not a url".into());

    let err = config_error(resolve(raw.clone(), &ConfigSources::default()));
    assert_eq!(err.key, keys::RIGHTS_URL);

    raw.rights.url = None;
    let settings = resolve(raw, &ConfigSources::default()).unwrap();
    assert_eq!(
        settings.rights.icon.as_deref(),
        Some("/resources/assets/licenses/cc-by-sa.png")
    );
}

#[test]
fn rights_icon_rejects_relative_and_protocol_relative_paths() {
    for icon in ["badge.png", "//cdn.example/x.png"] {
        let mut raw = RawConfig::default();
        raw.rights.icon = Some(icon.into());

        let err = config_error(resolve(raw, &ConfigSources::default()));
        assert_eq!(err.key, keys::RIGHTS_ICON);
        assert_eq!(err.value, icon);
    }
}

#[test]
fn omitted_sections_use_host_defaults() {
    let settings = resolve(RawConfig::default(), &ConfigSources::default()).unwrap();
    assert_eq!(settings.jobs.run_rate, 1);
    assert_eq!(settings.cache.main, CacheBackend::None);
    assert_eq!(settings.cache.parser, CacheBackend::Database);
    assert!(settings.uploads.allows("jpeg"));
}
