use serde::Deserialize;

use crate::settings::keys;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::types::UploadPolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct UploadsSection {
    pub(super) file_extensions: Option<Vec<String>>,
}

impl UploadsSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UploadPolicy, ConfigError> {
        let Some(extensions) = self.file_extensions else {
            return Ok(UploadPolicy::default());
        };

        UploadPolicy::from_extensions(&extensions).map_err(|err| {
            ConfigError::invalid(
                keys::FILE_EXTENSIONS,
                extensions.join(","),
                sources.source_for(keys::FILE_EXTENSIONS),
                err,
            )
        })
    }
}
