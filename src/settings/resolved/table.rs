use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::Settings;
use crate::settings::keys;

const REDACTED: &str = "********";

/// Typed value of one entry in the settings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl SettingValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::List(values) => {
                let quoted: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
            Self::Map(map) => {
                let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{k} = {v:?}")).collect();
                write!(f, "{{ {} }}", pairs.join(", "))
            }
        }
    }
}

/// One named entry and the host variable it configures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub name: &'static str,
    pub host_variable: &'static str,
    pub value: SettingValue,
}

/// Flat, ordered view of [`Settings`]. Disabled settings have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsTable {
    entries: Vec<Setting>,
}

impl SettingsTable {
    fn push(&mut self, name: &'static str, host_variable: &'static str, value: SettingValue) {
        debug_assert!(self.get(name).is_none(), "duplicate setting {name}");
        self.entries.push(Setting {
            name,
            host_variable,
            value,
        });
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the table with credentials masked, for display.
    pub fn redacted(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .cloned()
            .map(|mut entry| {
                if let SettingValue::Map(map) = &mut entry.value
                    && let Some(password) = map.get_mut("password")
                {
                    *password = REDACTED.to_string();
                }
                entry
            })
            .collect();
        Self { entries }
    }
}

impl Serialize for SettingsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.name, &entry.value)?;
        }
        map.end()
    }
}

fn string(value: impl ToString) -> SettingValue {
    SettingValue::String(value.to_string())
}

fn list<T: ToString>(values: &[T]) -> SettingValue {
    SettingValue::List(values.iter().map(ToString::to_string).collect())
}

pub(super) fn build(settings: &Settings) -> SettingsTable {
    let mut table = SettingsTable::default();

    table.push(
        keys::JOB_RUN_RATE,
        "wgJobRunRate",
        SettingValue::Int(i64::from(settings.jobs.run_rate)),
    );

    let mail = &settings.mail;
    if let Some(address) = &mail.emergency_contact {
        table.push(keys::EMERGENCY_CONTACT, "wgEmergencyContact", string(address));
    }
    if let Some(address) = &mail.password_sender {
        table.push(keys::PASSWORD_SENDER, "wgPasswordSender", string(address));
    }
    if let Some(relay) = &mail.smtp {
        table.push(keys::SMTP, "wgSMTP", SettingValue::Map(relay.to_host_map()));
    }

    let cache = &settings.cache;
    table.push(keys::MAIN_CACHE, "wgMainCacheType", string(cache.main));
    table.push(keys::PARSER_CACHE, "wgParserCacheType", string(cache.parser));
    table.push(keys::MESSAGE_CACHE, "wgMessageCacheType", string(cache.message));
    table.push(
        keys::MEMCACHED_SERVERS,
        "wgMemCachedServers",
        list(&cache.memcached_servers),
    );

    if let Some(zone) = &settings.locale.timezone {
        table.push(keys::TIMEZONE, "wgLocaltimezone", string(zone));
        table.push(
            keys::UTC_OFFSET,
            "wgLocalTZoffset",
            SettingValue::Int(i64::from(zone.offset_minutes())),
        );
        table.push(
            keys::TIME_CORRECTION,
            "wgDefaultUserOptions['timecorrection']",
            SettingValue::String(zone.time_correction()),
        );
    }
    if let Some(language) = &settings.locale.language {
        table.push(
            keys::LANGUAGE,
            "wgDefaultUserOptions['language']",
            string(language),
        );
    }

    table.push(
        keys::FILE_EXTENSIONS,
        "wgFileExtensions",
        list(settings.uploads.extensions()),
    );

    let rights = &settings.rights;
    for (key, host_variable, value) in [
        (keys::RIGHTS_PAGE, "wgRightsPage", &rights.page),
        (keys::RIGHTS_URL, "wgRightsUrl", &rights.url),
        (keys::RIGHTS_TEXT, "wgRightsText", &rights.text),
        (keys::RIGHTS_ICON, "wgRightsIcon", &rights.icon),
    ] {
        if let Some(value) = value {
            table.push(key, host_variable, string(value));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RightsSettings;
    use crate::types::SmtpRelay;

    #[test]
    fn defaults_cover_always_present_settings() {
        let table = Settings::default().table();
        assert_eq!(table.get(keys::JOB_RUN_RATE), Some(&SettingValue::Int(1)));
        assert_eq!(
            table.get(keys::MAIN_CACHE),
            Some(&SettingValue::String("none".into()))
        );
        assert!(!table.contains(keys::TIMEZONE));
        assert!(!table.contains(keys::SMTP));
        assert!(!table.contains(keys::RIGHTS_PAGE));
    }

    #[test]
    fn entries_keep_host_variable_names() {
        let table = Settings::default().table();
        let entry = table
            .iter()
            .find(|entry| entry.name == keys::FILE_EXTENSIONS)
            .unwrap();
        assert_eq!(entry.host_variable, "wgFileExtensions");
        assert_eq!(entry.value.type_name(), "list");
    }

    #[test]
    fn redaction_masks_smtp_password() {
        let mut settings = Settings::default();
        settings.mail.smtp = Some(SmtpRelay {
            host: "mail.example.com".into(),
            id_host: "example.com".into(),
            port: 587,
            username: Some("wiki".into()),
            password: Some("secret".into()),
            auth: true,
        });
        let table = settings.table();
        let redacted = table.redacted();

        let original = table.get(keys::SMTP).and_then(SettingValue::as_map).unwrap();
        let masked = redacted.get(keys::SMTP).and_then(SettingValue::as_map).unwrap();
        assert_eq!(original["password"], "secret");
        assert_eq!(masked["password"], REDACTED);
        assert_eq!(masked["host"], "mail.example.com");
    }

    #[test]
    fn json_output_is_a_flat_object() {
        let settings = Settings {
            rights: RightsSettings {
                text: Some("CC BY-SA licenses".into()),
                ..RightsSettings::default()
            },
            ..Settings::default()
        };
        let json = serde_json::to_value(settings.table()).unwrap();
        assert_eq!(json["jobs.run_rate"], 1);
        assert_eq!(json["rights.text"], "CC BY-SA licenses");
        assert_eq!(json["uploads.file_extensions"][0], "png");
    }

    #[test]
    fn display_quotes_strings_and_lists() {
        assert_eq!(SettingValue::String("en".into()).to_string(), "\"en\"");
        assert_eq!(
            SettingValue::List(vec!["a".into(), "b".into()]).to_string(),
            "[\"a\", \"b\"]"
        );
        assert_eq!(SettingValue::Bool(true).to_string(), "true");
    }
}
