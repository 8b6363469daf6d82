use lettre::Address;
use serde::Deserialize;
use tracing::warn;

use super::super::util::{is_enabled, non_empty};
use super::integer::IntegerValue;
use crate::settings::MailSettings;
use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::types::{SmtpRelay, ValueError, parse_port};

/// Port used when a relay is configured without one.
const DEFAULT_SMTP_PORT: i64 = 25;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct EmailSection {
    pub(super) enabled: Option<bool>,
    pub(super) emergency_contact: Option<String>,
    pub(super) password_sender: Option<String>,
    pub(super) smtp: Option<SmtpSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct SmtpSection {
    pub(super) enabled: Option<bool>,
    pub(super) host: Option<String>,
    pub(super) id_host: Option<String>,
    pub(super) port: Option<IntegerValue>,
    pub(super) username: Option<String>,
    pub(super) password: Option<String>,
    pub(super) auth: Option<bool>,
}

impl EmailSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<MailSettings, ConfigError> {
        if !is_enabled(self.enabled) {
            warn!(key = keys::EMAIL_ENABLED, "email section present but disabled");
            return Ok(MailSettings::default());
        }

        let emergency_contact = self
            .emergency_contact
            .map(|value| address(keys::EMERGENCY_CONTACT, &value, sources))
            .transpose()?;
        let password_sender = self
            .password_sender
            .map(|value| address(keys::PASSWORD_SENDER, &value, sources))
            .transpose()?;
        let smtp = match self.smtp {
            Some(section) => section.resolve(sources)?,
            None => None,
        };

        Ok(MailSettings {
            emergency_contact,
            password_sender,
            smtp,
        })
    }
}

impl SmtpSection {
    fn resolve(self, sources: &ConfigSources) -> Result<Option<SmtpRelay>, ConfigError> {
        if !is_enabled(self.enabled) {
            warn!(key = keys::SMTP_ENABLED, "SMTP relay present but disabled, using local delivery");
            return Ok(None);
        }

        let Some(host) = non_empty(self.host) else {
            return Err(ConfigError::invalid(
                keys::SMTP_HOST,
                "",
                sources.source_for(keys::SMTP_HOST),
                "a host is required when the SMTP relay is enabled",
            ));
        };

        let raw_port = match self.port {
            Some(value) => value.resolve(keys::SMTP_PORT, sources)?,
            None => DEFAULT_SMTP_PORT,
        };
        let port = parse_port(raw_port).map_err(|err| {
            ConfigError::invalid(
                keys::SMTP_PORT,
                raw_port.to_string(),
                sources.source_for(keys::SMTP_PORT),
                err,
            )
        })?;

        let username = non_empty(self.username);
        let password = self.password.filter(|value| !value.is_empty());
        let auth = self.auth.unwrap_or(false);
        if auth {
            if username.is_none() {
                return Err(ConfigError::invalid(
                    keys::SMTP_USERNAME,
                    "",
                    sources.source_for(keys::SMTP_USERNAME),
                    "required when auth is enabled",
                ));
            }
            if password.is_none() {
                return Err(ConfigError::invalid(
                    keys::SMTP_PASSWORD,
                    "",
                    sources.source_for(keys::SMTP_PASSWORD),
                    "required when auth is enabled",
                ));
            }
        }

        let id_host = non_empty(self.id_host).unwrap_or_else(|| host.clone());

        Ok(Some(SmtpRelay {
            host,
            id_host,
            port,
            username,
            password,
            auth,
        }))
    }
}

fn address(key: &'static str, value: &str, sources: &ConfigSources) -> Result<Address, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid(key, value, sources.source_for(key), ValueError::Empty));
    }

    trimmed
        .parse::<Address>()
        .map_err(|err| ConfigError::invalid(key, value, sources.source_for(key), err))
}
