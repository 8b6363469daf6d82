use std::collections::HashSet;
use std::path::Path;

use super::ValueError;

/// Extensions the host accepts when no allow-list is configured.
const DEFAULT_FILE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg", "webp"];

/// Case-insensitive allow-list of upload file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    extensions: Vec<String>,
}

impl UploadPolicy {
    /// Build a policy from user supplied extensions.
    ///
    /// Values are trimmed, stripped of a leading dot, lowercased and
    /// deduplicated in declaration order. Blank entries are skipped.
    pub fn from_extensions<I, S>(values: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut extensions = Vec::new();
        for value in values {
            let normalized = value
                .as_ref()
                .trim()
                .trim_start_matches('.')
                .to_ascii_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ValueError::InvalidExtension(normalized));
            }
            if seen.insert(normalized.clone()) {
                extensions.push(normalized);
            }
        }
        Ok(Self { extensions })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `extension` (with or without a leading dot) is allowed.
    pub fn allows(&self, extension: &str) -> bool {
        let candidate = extension.trim().trim_start_matches('.');
        self.extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(candidate))
    }

    /// Whether a file name ends in an allowed extension.
    pub fn allows_file(&self, name: impl AsRef<Path>) -> bool {
        name.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.allows(ext))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}
