/// Trim a string and drop it when nothing is left.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Treat a missing `enabled` flag as enabled.
pub(super) fn is_enabled(flag: Option<bool>) -> bool {
    flag.unwrap_or(true)
}
