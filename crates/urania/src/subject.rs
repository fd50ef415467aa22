//! Subject resolution: from a name, a local civil moment, and a place to
//! UTC and a Julian day.
//!
//! The moment is always supplied by the caller; nothing here reads the
//! current time.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::GeoLocation;

#[derive(Debug, Error)]
pub enum SubjectError {
    #[error("no location found for city {name}")]
    UnknownPlace { name: String },
    #[error("unknown timezone {zone}")]
    UnknownTimezone { zone: String },
    #[error("local time {local} is ambiguous or nonexistent in {zone}")]
    InvalidLocalTime { local: NaiveDateTime, zone: String },
}

/// How the subject's place is given: direct coordinates with a timezone
/// name, or a city to look up through a [`LocationResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum PlaceSpec {
    Coordinates {
        location: GeoLocation,
        timezone: String,
    },
    CityLookup {
        city: String,
    },
}

/// A chart subject as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    /// Civil wall-clock time at the subject's place.
    pub local_time: NaiveDateTime,
    pub place: PlaceSpec,
}

/// Coordinates and timezone name a place resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub location: GeoLocation,
    pub timezone: String,
}

/// Supplies geographic and timezone facts the resolution step needs.
///
/// `utc_offset` reports the offset in force at the given local time and
/// fails when that local time is ambiguous or nonexistent in the zone.
pub trait LocationResolver {
    fn resolve_city(&self, city: &str) -> Result<ResolvedPlace, SubjectError>;

    fn utc_offset(
        &self,
        timezone: &str,
        local: NaiveDateTime,
    ) -> Result<FixedOffset, SubjectError>;
}

/// A subject with its moment pinned to UTC and its place to coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSubject {
    pub name: String,
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub location: GeoLocation,
    pub timezone: String,
}

/// Resolves a subject's place and converts its local moment to UTC and a
/// Julian day.
pub fn resolve_subject(
    subject: &Subject,
    resolver: &dyn LocationResolver,
) -> Result<ResolvedSubject, SubjectError> {
    let resolved = match &subject.place {
        PlaceSpec::Coordinates { location, timezone } => ResolvedPlace {
            location: *location,
            timezone: timezone.clone(),
        },
        PlaceSpec::CityLookup { city } => resolver.resolve_city(city)?,
    };

    let offset = resolver.utc_offset(&resolved.timezone, subject.local_time)?;
    let utc = offset
        .from_local_datetime(&subject.local_time)
        .single()
        .ok_or_else(|| SubjectError::InvalidLocalTime {
            local: subject.local_time,
            zone: resolved.timezone.clone(),
        })?
        .with_timezone(&Utc);

    Ok(ResolvedSubject {
        name: subject.name.clone(),
        utc,
        julian_day: julian_day(utc),
        location: resolved.location,
        timezone: resolved.timezone,
    })
}

/// Julian day number for a UTC moment, Gregorian calendar.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    let mut year = utc.year() as f64;
    let mut month = utc.month() as f64;
    let day = utc.day() as f64
        + (utc.hour() as f64
            + utc.minute() as f64 / 60.0
            + (utc.second() as f64 + utc.nanosecond() as f64 / 1e9) / 3600.0)
            / 24.0;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}
