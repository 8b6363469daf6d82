//! Settings loading and resolution.
//!
//! The pipeline merges files and environment variables with the `config`
//! crate into a raw mirror of the file format, applies command line
//! overrides, then resolves and validates everything into [`Settings`].
//! `load` is the primary entry point; `load_str` reads a single in-memory
//! document.

pub mod keys;
mod loader;
mod options;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::{load, load_str};
pub use options::{LoadOptions, Overrides};
pub use resolved::{
    CacheSettings, ConfigError, DEFAULT_JOB_RUN_RATE, JobSettings, LocaleSettings, MailSettings,
    RightsSettings, Setting, SettingSource, SettingValue, Settings, SettingsTable,
};
