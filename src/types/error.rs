use thiserror::Error;

/// Reasons a single setting value can be rejected while parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The cache backend name is not one of the supported backends.
    #[error("unknown cache backend '{0}' (expected none, in-process, memcached or database)")]
    UnknownBackend(String),

    /// An endpoint was given without a `:port` suffix.
    #[error("endpoint '{0}' must be written as host:port")]
    MissingPort(String),

    /// An endpoint had nothing before the port separator.
    #[error("endpoint '{0}' has an empty host")]
    EmptyHost(String),

    /// A port was not a number in the TCP range.
    #[error("port must be between 1 and 65535")]
    PortRange,

    /// An upload extension contained something other than ASCII letters and digits.
    #[error("extension '{0}' must contain only ASCII letters and digits")]
    InvalidExtension(String),

    /// The timezone is not present in the IANA database.
    #[error("'{0}' is not a known IANA timezone")]
    UnknownTimezone(String),

    /// The language is not a lowercase locale code.
    #[error("'{0}' is not a valid language code")]
    InvalidLanguage(String),

    /// An enabled value was left empty.
    #[error("value must not be empty")]
    Empty,
}
