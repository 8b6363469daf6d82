//! Typed, validated settings for a wiki host.
//!
//! Settings are read once at startup from files and the environment,
//! validated as a whole, and handed to consumers as an immutable
//! [`Settings`] record. The root module re-exports the pieces embedders need
//! so they do not have to dig through the module hierarchy.

pub mod app_dirs;
pub mod environment;
pub mod logging;
pub mod settings;
pub mod types;

pub use config::FileFormat;
pub use settings::{
	ConfigError, LoadOptions, Overrides, SettingSource, SettingValue, Settings, SettingsTable, load,
	load_str,
};
pub use types::{CacheBackend, Endpoint, LanguageCode, LocalTimezone, MailDelivery, SmtpRelay, UploadPolicy};
