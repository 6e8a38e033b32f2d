//! Document results and the `lastUpdatedDate` conversion.
//!
//! The native store reports `lastUpdatedDate` as epoch milliseconds because
//! its map type has no date value. [`convert_timestamp_to_date`] turns it back
//! into a [`DateTime<Utc>`] and leaves every other field as received.

use bridge_traits::data::{keys, DocumentMap};
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Largest magnitude, in milliseconds, of a valid date (±100,000,000 days
/// around the epoch).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// A document with metadata, as returned by read, create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: DocumentMap,
    last_updated_date: Option<DateTime<Utc>>,
}

impl Document {
    /// Every response field except a converted `lastUpdatedDate`.
    pub fn fields(&self) -> &DocumentMap {
        &self.fields
    }

    pub fn into_fields(self) -> DocumentMap {
        self.fields
    }

    /// The converted timestamp, if the response carried a usable one.
    pub fn last_updated_date(&self) -> Option<DateTime<Utc>> {
        self.last_updated_date
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field(keys::ID)
    }

    pub fn partition(&self) -> Option<&str> {
        self.str_field(keys::PARTITION)
    }

    pub fn e_tag(&self) -> Option<&str> {
        self.str_field(keys::E_TAG)
    }

    /// Raw JSON text of the document payload.
    pub fn json_value(&self) -> Option<&str> {
        self.str_field(keys::JSON_VALUE)
    }

    pub fn deserialized_value(&self) -> Option<&Value> {
        self.fields.get(keys::DESERIALIZED_VALUE)
    }

    /// Decode the payload into `T`.
    pub fn value_as<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.deserialized_value()
            .map(|value| serde_json::from_value(value.clone()))
    }

    pub fn is_from_device_cache(&self) -> bool {
        self.fields
            .get(keys::IS_FROM_DEVICE_CACHE)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Convert a truthy numeric `lastUpdatedDate` into a date.
///
/// Absent, `null`, `0` and any other falsy value leave the result untouched.
/// An epoch of exactly `0` is therefore reported as "no timestamp". RFC 3339
/// strings are parsed and `true` counts as 1 ms; values that do not name a
/// date (numbers outside the range, other strings, objects, arrays) stay in
/// the map as received.
pub fn convert_timestamp_to_date(mut result: DocumentMap) -> Document {
    let date = match result.get(keys::LAST_UPDATED_DATE) {
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|ms| *ms != 0.0)
            .and_then(millis_to_date),
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        Some(Value::Bool(true)) => millis_to_date(1.0),
        _ => None,
    };

    if date.is_some() {
        result.remove(keys::LAST_UPDATED_DATE);
    }

    Document {
        fields: result,
        last_updated_date: date,
    }
}

fn millis_to_date(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    Utc.timestamp_millis_opt(millis.trunc() as i64).single()
}
