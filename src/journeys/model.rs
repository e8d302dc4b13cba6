//! Typed city bike journey records
//!
//! This module turns a validated CSV row into a typed journey record,
//! with field parsing helpers that carry the column name and offending
//! value in every error message.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{JOURNEY_DATETIME_FORMAT, JOURNEY_FIELD_COUNT, JOURNEY_FIELDS};
use crate::{Error, Result};

/// One city bike journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    /// Departure timestamp (local time, as exported)
    pub departure_time: NaiveDateTime,

    /// Return timestamp (local time, as exported)
    pub return_time: NaiveDateTime,

    /// Identifier of the departure station
    pub departure_station_id: i32,

    /// Name of the departure station
    pub departure_station_name: String,

    /// Identifier of the return station
    pub return_station_id: i32,

    /// Name of the return station
    pub return_station_name: String,

    /// Covered distance in meters
    pub distance_m: f64,

    /// Journey duration in seconds
    pub duration_s: i32,
}

impl Journey {
    /// Build a journey from a validated CSV row
    ///
    /// The row must follow the journey export layout in
    /// [`JOURNEY_FIELDS`]. Content rules: station identifiers, distance
    /// and duration are non-negative, and the return time is not before
    /// the departure time.
    pub fn from_row(fields: &[String]) -> Result<Self> {
        if fields.len() != JOURNEY_FIELD_COUNT {
            return Err(Error::data_validation(format!(
                "journey row has {} fields, expected {}",
                fields.len(),
                JOURNEY_FIELD_COUNT
            )));
        }

        let journey = Journey {
            departure_time: parse_required_datetime(fields, 0)?,
            return_time: parse_required_datetime(fields, 1)?,
            departure_station_id: parse_required_i32(fields, 2)?,
            departure_station_name: parse_required_string(fields, 3)?,
            return_station_id: parse_required_i32(fields, 4)?,
            return_station_name: parse_required_string(fields, 5)?,
            distance_m: parse_required_f64(fields, 6)?,
            duration_s: parse_required_i32(fields, 7)?,
        };
        journey.validate()?;
        Ok(journey)
    }

    fn validate(&self) -> Result<()> {
        if self.departure_station_id < 0 || self.return_station_id < 0 {
            return Err(Error::data_validation("negative station identifier"));
        }
        if self.distance_m < 0.0 {
            return Err(Error::data_validation(format!(
                "negative distance: {}",
                self.distance_m
            )));
        }
        if self.duration_s < 0 {
            return Err(Error::data_validation(format!(
                "negative duration: {}",
                self.duration_s
            )));
        }
        if self.return_time < self.departure_time {
            return Err(Error::data_validation(format!(
                "return time {} before departure time {}",
                self.return_time, self.departure_time
            )));
        }
        Ok(())
    }
}

/// Parse a required timestamp field from a journey row
pub fn parse_required_datetime(fields: &[String], index: usize) -> Result<NaiveDateTime> {
    let value = get_required_field(fields, index)?;
    NaiveDateTime::parse_from_str(value, JOURNEY_DATETIME_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "invalid timestamp for {}: {:?} (expected YYYY-MM-DDTHH:MM:SS)",
                JOURNEY_FIELDS[index], value
            ),
            e,
        )
    })
}

/// Parse a required integer field from a journey row
pub fn parse_required_i32(fields: &[String], index: usize) -> Result<i32> {
    let value = get_required_field(fields, index)?;
    value.parse::<i32>().map_err(|e| {
        Error::data_validation(format!(
            "invalid integer for {}: {:?} ({})",
            JOURNEY_FIELDS[index], value, e
        ))
    })
}

/// Parse a required floating point field from a journey row
pub fn parse_required_f64(fields: &[String], index: usize) -> Result<f64> {
    let value = get_required_field(fields, index)?;
    value.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "invalid number for {}: {:?} ({})",
            JOURNEY_FIELDS[index], value, e
        ))
    })
}

/// Parse a required non-empty string field from a journey row
pub fn parse_required_string(fields: &[String], index: usize) -> Result<String> {
    let value = get_required_field(fields, index)?;
    Ok(value.to_string())
}

fn get_required_field(fields: &[String], index: usize) -> Result<&str> {
    let value = fields.get(index).ok_or_else(|| {
        Error::data_validation(format!("missing field {}", JOURNEY_FIELDS[index]))
    })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!(
            "empty value for {}",
            JOURNEY_FIELDS[index]
        )));
    }
    Ok(trimmed)
}
