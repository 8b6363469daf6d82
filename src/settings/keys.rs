//! Setting names as they appear in settings files and in the settings table.

pub const JOB_RUN_RATE: &str = "jobs.run_rate";

pub const EMAIL_ENABLED: &str = "email.enabled";
pub const EMERGENCY_CONTACT: &str = "email.emergency_contact";
pub const PASSWORD_SENDER: &str = "email.password_sender";
pub const SMTP: &str = "email.smtp";
pub const SMTP_ENABLED: &str = "email.smtp.enabled";
pub const SMTP_HOST: &str = "email.smtp.host";
pub const SMTP_PORT: &str = "email.smtp.port";
pub const SMTP_USERNAME: &str = "email.smtp.username";
pub const SMTP_PASSWORD: &str = "email.smtp.password";

pub const MAIN_CACHE: &str = "cache.main";
pub const PARSER_CACHE: &str = "cache.parser";
pub const MESSAGE_CACHE: &str = "cache.message";
pub const MEMCACHED_SERVERS: &str = "cache.memcached_servers";

pub const LOCALE_ENABLED: &str = "locale.enabled";
pub const TIMEZONE: &str = "locale.timezone";
pub const UTC_OFFSET: &str = "locale.utc_offset";
pub const TIME_CORRECTION: &str = "locale.time_correction";
pub const LANGUAGE: &str = "locale.language";

pub const FILE_EXTENSIONS: &str = "uploads.file_extensions";

pub const RIGHTS_PAGE: &str = "rights.page";
pub const RIGHTS_URL: &str = "rights.url";
pub const RIGHTS_TEXT: &str = "rights.text";
pub const RIGHTS_ICON: &str = "rights.icon";

/// Prefix shared by every environment variable the loader reads.
pub const ENV_PREFIX: &str = "WIKI_SETTINGS";
/// Separator between the prefix and nested key segments.
pub const ENV_SEPARATOR: &str = "__";

/// Environment variable that overrides `key`, e.g. `WIKI_SETTINGS__JOBS__RUN_RATE`.
pub fn env_var(key: &str) -> String {
    let mut name = String::from(ENV_PREFIX);
    for segment in key.split('.') {
        name.push_str(ENV_SEPARATOR);
        name.push_str(&segment.to_ascii_uppercase());
    }
    name
}
