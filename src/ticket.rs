//! Ticket records as they appear in the input document.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};
use std::ops::RangeInclusive;

use crate::error::FieldParseError;

/// A time-of-day layout: chrono pattern plus the hour widths it allows.
///
/// chrono accepts one or two digits for any numeric field when parsing, so
/// the digit counts are checked separately.
struct TimeFormat {
    pattern: &'static str,
    hour_digits: RangeInclusive<usize>,
}

/// Candidate time-of-day formats, tried in order. The first one that parses wins.
const TIME_FORMATS: &[TimeFormat] = &[
    // HH:mm
    TimeFormat {
        pattern: "%H:%M",
        hour_digits: 2..=2,
    },
    // H:mm
    TimeFormat {
        pattern: "%H:%M",
        hour_digits: 1..=2,
    },
];

/// `dd.MM.yy`
const DATE_FORMAT: &str = "%d.%m.%y";

/// A single flight offer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,

    #[serde(deserialize_with = "deserialize_date")]
    pub departure_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_time")]
    pub departure_time: NaiveTime,
    #[serde(deserialize_with = "deserialize_date")]
    pub arrival_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_time")]
    pub arrival_time: NaiveTime,

    pub carrier: String,
    pub stops: i32,
    pub price: i32,
}

impl Ticket {
    pub fn departure(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    /// Whole minutes between departure and arrival, truncated toward zero.
    ///
    /// Negative when the record has arrival before departure; such records are
    /// not rejected.
    pub fn flight_duration_minutes(&self) -> i64 {
        (self.arrival() - self.departure()).num_minutes()
    }
}

/// Top-level document: `{ "tickets": [ ... ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketList {
    pub tickets: Vec<Ticket>,
}

/// Parses a time of day in `HH:mm` or `H:mm` form.
pub fn parse_time(text: &str) -> Result<NaiveTime, FieldParseError> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| fmt.parse(text))
        .ok_or_else(|| FieldParseError::Time(text.to_string()))
}

impl TimeFormat {
    fn parse(&self, text: &str) -> Option<NaiveTime> {
        let (hour, minute) = text.split_once(':')?;
        if !is_digits(hour, self.hour_digits.clone()) || !is_digits(minute, 2..=2) {
            return None;
        }
        NaiveTime::parse_from_str(text, self.pattern).ok()
    }
}

/// `true` if `part` is all ASCII digits and its length is in `len`.
fn is_digits(part: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a `dd.MM.yy` date. Two-digit years always land in 2000..=2099.
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldParseError> {
    let text = text.trim();
    if !text.split('.').all(|part| is_digits(part, 2..=2)) {
        return Err(FieldParseError::Date(text.to_string()));
    }

    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| FieldParseError::Date(text.to_string()))?;

    if date.year() >= 2000 {
        return Ok(date);
    }

    NaiveDate::from_ymd_opt(date.year() + 100, date.month(), date.day())
        .ok_or_else(|| FieldParseError::Date(text.to_string()))
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_time(&text).map_err(serde::de::Error::custom)
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).map_err(serde::de::Error::custom)
}
