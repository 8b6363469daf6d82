use anyhow::{Result, anyhow};
use chrono::Utc;
use config::{Config, File, FileFormat};
use tracing::{debug, info};

use super::options::{LoadOptions, Overrides};
use super::raw::RawConfig;
use super::resolved::{ConfigSources, Settings};
use super::sources::build_config;

/// Load settings by combining default files, explicit files, environment
/// variables and command line overrides.
pub fn load(options: &LoadOptions) -> Result<Settings> {
    let config = build_config(options)?;
    resolve(config, &options.overrides, ConfigSources::new(options.environment))
}

/// Load settings from a single document, without consulting any other source.
pub fn load_str(text: &str, format: FileFormat) -> Result<Settings> {
    let config = Config::builder()
        .add_source(File::from_str(text, format))
        .build()
        .map_err(|err| anyhow!("failed to parse settings: {err}"))?;
    resolve(config, &Overrides::default(), ConfigSources::default())
}

fn resolve(config: Config, overrides: &Overrides, mut sources: ConfigSources) -> Result<Settings> {
    let mut raw: RawConfig = config
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
    raw.apply_overrides(overrides, &mut sources);
    debug!(overridden = ?sources.overridden_keys(), "resolving merged settings");

    let settings = raw.resolve(&sources, Utc::now())?;
    info!(
        entries = settings.table().len(),
        job_run_rate = settings.jobs.run_rate,
        main_cache = %settings.cache.main,
        "settings loaded"
    );

    Ok(settings)
}
