use lettre::Address;

use crate::types::{
    CacheBackend, Endpoint, LanguageCode, LocalTimezone, MailDelivery, SmtpRelay, UploadPolicy,
};

mod errors;
mod sources;
mod summary;
mod table;
mod validation;

pub use errors::ConfigError;
pub(crate) use sources::ConfigSources;
pub use sources::SettingSource;
pub use table::{Setting, SettingValue, SettingsTable};

/// Jobs the host runs per request when no rate is configured.
pub const DEFAULT_JOB_RUN_RATE: u32 = 1;

/// Validated settings, built once at startup and read-only afterwards.
///
/// Consumers receive this by reference rather than through process-wide
/// state; [`Settings::table`] flattens it into host variable form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub jobs: JobSettings,
    pub mail: MailSettings,
    pub cache: CacheSettings,
    pub locale: LocaleSettings,
    pub uploads: UploadPolicy,
    pub rights: RightsSettings,
}

/// Background job execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSettings {
    /// Jobs executed per web request.
    pub run_rate: u32,
}

impl JobSettings {
    /// A rate of zero hands job processing to an external scheduler.
    pub fn uses_external_runner(&self) -> bool {
        self.run_rate == 0
    }
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            run_rate: DEFAULT_JOB_RUN_RATE,
        }
    }
}

/// Notification addresses and outbound transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MailSettings {
    pub emergency_contact: Option<Address>,
    pub password_sender: Option<Address>,
    pub smtp: Option<SmtpRelay>,
}

impl MailSettings {
    pub fn delivery(&self) -> MailDelivery<'_> {
        match &self.smtp {
            Some(relay) => MailDelivery::Smtp(relay),
            None => MailDelivery::Local,
        }
    }
}

/// Backends for the host's three object caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub main: CacheBackend,
    pub parser: CacheBackend,
    pub message: CacheBackend,
    pub memcached_servers: Vec<Endpoint>,
}

impl CacheSettings {
    pub fn backends(&self) -> [CacheBackend; 3] {
        [self.main, self.parser, self.message]
    }

    /// Whether any cache role needs the shared-memory daemon.
    pub fn uses_memcached(&self) -> bool {
        self.backends().contains(&CacheBackend::Memcached)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            main: CacheBackend::None,
            parser: CacheBackend::Database,
            message: CacheBackend::Database,
            memcached_servers: Vec::new(),
        }
    }
}

/// Timezone and default language for new accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSettings {
    pub timezone: Option<LocalTimezone>,
    pub language: Option<LanguageCode>,
}

/// Licensing metadata shown alongside page content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RightsSettings {
    pub page: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
}

impl Settings {
    pub(crate) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Flatten into the name-to-value table the host consumes.
    pub fn table(&self) -> SettingsTable {
        table::build(self)
    }

    /// Look up a single entry of [`Settings::table`].
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        self.table().get(name).cloned()
    }

    /// Human readable summary of the effective settings.
    pub fn summary(&self) -> String {
        summary::render(self)
    }

    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }
}
