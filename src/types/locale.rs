use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::ValueError;

/// The wiki's local timezone together with the UTC offset observed when the
/// settings were loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTimezone {
    zone: Tz,
    offset_minutes: i32,
}

impl LocalTimezone {
    /// Resolve an IANA zone name using the current instant for the offset.
    pub fn parse(name: &str) -> Result<Self, ValueError> {
        Self::parse_at(name, Utc::now())
    }

    /// Resolve an IANA zone name, computing the offset at `instant`.
    pub fn parse_at(name: &str, instant: DateTime<Utc>) -> Result<Self, ValueError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueError::Empty);
        }
        let zone = Tz::from_str(trimmed)
            .map_err(|_| ValueError::UnknownTimezone(trimmed.to_string()))?;
        let offset_seconds = zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();

        Ok(Self {
            zone,
            offset_minutes: offset_seconds / 60,
        })
    }

    /// IANA identifier, also the value exported through `TZ`.
    pub fn name(&self) -> &'static str {
        self.zone.name()
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Minutes east of UTC at load time.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Default per-user time correction in the host's `ZoneInfo|offset|zone` form.
    pub fn time_correction(&self) -> String {
        format!("ZoneInfo|{}|{}", self.offset_minutes, self.name())
    }
}

impl fmt::Display for LocalTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interface language code applied to new accounts, such as `en` or `de-formal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageCode {
    type Err = ValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ValueError::Empty);
        }

        let starts_with_letter = normalized
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase());
        let well_formed = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !starts_with_letter || !well_formed || normalized.ends_with('-') {
            return Err(ValueError::InvalidLanguage(value.trim().to_string()));
        }

        Ok(Self(normalized))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
