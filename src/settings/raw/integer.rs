use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::settings::resolved::{ConfigError, ConfigSources};

/// An integer option as read from a source, before range checks.
///
/// `config` rounds floats and turns booleans into `0`/`1` when asked for an
/// integer, so the value is read through `deserialize_any` and anything that
/// is not a whole number is kept verbatim for the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum IntegerValue {
    Int(i64),
    Invalid(String),
}

impl IntegerValue {
    /// Return the integer or an error naming `key` and the rejected value.
    pub(super) fn resolve(self, key: &'static str, sources: &ConfigSources) -> Result<i64, ConfigError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Invalid(raw) => Err(ConfigError::invalid(
                key,
                raw,
                sources.source_for(key),
                "must be an integer",
            )),
        }
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<'de> Deserialize<'de> for IntegerValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntegerVisitor)
    }
}

struct IntegerVisitor;

impl Visitor<'_> for IntegerVisitor {
    type Value = IntegerValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(IntegerValue::Int(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| IntegerValue::Invalid(value.to_string()), IntegerValue::Int))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| IntegerValue::Invalid(value.to_string()), IntegerValue::Int))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| IntegerValue::Invalid(value.to_string()), IntegerValue::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(IntegerValue::Invalid(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(IntegerValue::Invalid(value.to_string()))
    }

    // environment variables and INI files deliver numbers as text
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value
            .trim()
            .parse::<i64>()
            .map_or_else(|_| IntegerValue::Invalid(value.to_string()), IntegerValue::Int))
    }
}

#[cfg(test)]
mod tests {
    use serde::de::IntoDeserializer;
    use serde::de::value::Error as DeError;

    use super::*;

    fn read<'de, D: Deserializer<'de, Error = DeError>>(deserializer: D) -> IntegerValue {
        IntegerValue::deserialize(deserializer).unwrap()
    }

    #[test]
    fn whole_numbers_and_numeric_text_are_accepted() {
        assert_eq!(read(7_i64.into_deserializer()), IntegerValue::Int(7));
        assert_eq!(read(" 42 ".into_deserializer()), IntegerValue::Int(42));
        assert_eq!(read(u64::MAX.into_deserializer()), IntegerValue::Invalid(u64::MAX.to_string()));
    }

    #[test]
    fn floats_and_booleans_are_kept_for_the_error() {
        assert_eq!(read(1.5_f64.into_deserializer()), IntegerValue::Invalid("1.5".into()));
        assert_eq!(read(true.into_deserializer()), IntegerValue::Invalid("true".into()));
        assert_eq!(read("often".into_deserializer()), IntegerValue::Invalid("often".into()));
    }
}
