use std::fmt;
use std::str::FromStr;

use super::ValueError;

/// Backend the wiki host uses for one of its object caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheBackend {
    /// Caching disabled.
    None,
    /// Per-process accelerator cache (APCu and friends).
    InProcess,
    /// External shared-memory daemon reached over the network.
    Memcached,
    /// The host's own database tables.
    Database,
}

impl CacheBackend {
    /// Canonical name used in settings files and in the settings table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::InProcess => "in-process",
            Self::Memcached => "memcached",
            Self::Database => "database",
        }
    }

    /// Name of the constant the wiki host defines for this backend.
    pub fn host_constant(self) -> &'static str {
        match self {
            Self::None => "CACHE_NONE",
            Self::InProcess => "CACHE_ACCEL",
            Self::Memcached => "CACHE_MEMCACHED",
            Self::Database => "CACHE_DB",
        }
    }
}

impl FromStr for CacheBackend {
    type Err = ValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "none" | "cache-none" => Ok(Self::None),
            "in-process" | "accel" | "apcu" | "cache-accel" => Ok(Self::InProcess),
            "memcached" | "shared-memory-daemon" | "cache-memcached" => Ok(Self::Memcached),
            "database" | "db" | "cache-db" => Ok(Self::Database),
            _ => Err(ValueError::UnknownBackend(value.trim().to_string())),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Memcached".parse(), Ok(CacheBackend::Memcached));
        assert_eq!("shared-memory-daemon".parse(), Ok(CacheBackend::Memcached));
        assert_eq!("CACHE_MEMCACHED".parse(), Ok(CacheBackend::Memcached));
        assert_eq!("apcu".parse(), Ok(CacheBackend::InProcess));
        assert_eq!(" db ".parse(), Ok(CacheBackend::Database));
        assert_eq!("none".parse(), Ok(CacheBackend::None));
    }

    #[test]
    fn rejects_unknown_backends() {
        let err = "redis".parse::<CacheBackend>().unwrap_err();
        assert_eq!(err, ValueError::UnknownBackend("redis".into()));
        assert!(err.to_string().contains("memcached"));
    }

    #[test]
    fn host_constants_match_backends() {
        assert_eq!(CacheBackend::Memcached.host_constant(), "CACHE_MEMCACHED");
        assert_eq!(CacheBackend::Database.to_string(), "database");
    }
}
