//! Conversion between slot labels (`"09:00 AM - 10:00 AM"`) and the
//! `YYYY-MM-DDTHH:MM:SS` timestamps the backend expects.
//!
//! Only the start of a label is transmitted; the end is implied by the
//! fixed one-hour slot length.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::errors::{BookingError, BookingResult};

/// Timestamp layout used for appointment creation and reschedules.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Renders an hour of the day as `"HH:00 AM"` / `"HH:00 PM"`.
pub fn format_hour_12h(hour: u32) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:00 {}", hour12, suffix)
}

/// Label for the one-hour slot starting at `hour`.
pub fn slot_label(hour: u32) -> String {
    format!("{} - {}", format_hour_12h(hour), format_hour_12h(hour + 1))
}

/// Parses the start time of a slot label.
///
/// Accepts either a full range label or a bare start time. The start must be
/// `HH:MM AM` or `HH:MM PM` with `HH` in `1..=12`.
pub fn parse_slot_start(label: &str) -> BookingResult<NaiveTime> {
    let malformed = || BookingError::MalformedSlotLabel(label.to_string());

    let start = label.split(" - ").next().unwrap_or_default().trim();
    let (clock, meridiem) = start.split_once(' ').ok_or_else(malformed)?;
    let (hours, minutes) = clock.split_once(':').ok_or_else(malformed)?;

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !digits(hours)
        || !digits(minutes)
    {
        return Err(malformed());
    }
    let hour12: u32 = hours.parse().map_err(|_| malformed())?;
    let minute: u32 = minutes.parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&hour12) || minute > 59 {
        return Err(malformed());
    }

    let hour = match meridiem.trim() {
        "AM" => hour12 % 12,
        "PM" => hour12 % 12 + 12,
        _ => return Err(malformed()),
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// 24-hour start hour of a slot label.
pub fn slot_start_hour(label: &str) -> BookingResult<u32> {
    parse_slot_start(label).map(|time| time.hour())
}

pub fn booking_datetime(date: NaiveDate, label: &str) -> BookingResult<NaiveDateTime> {
    Ok(date.and_time(parse_slot_start(label)?))
}

/// Backend timestamp for a slot on `date`, e.g. `2025-06-02T14:00:00`.
pub fn booking_timestamp(date: NaiveDate, label: &str) -> BookingResult<String> {
    Ok(booking_datetime(date, label)?
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

/// Hour component of a timestamp produced by [`booking_timestamp`].
pub fn hour_of_timestamp(timestamp: &str) -> BookingResult<u32> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|dt| dt.hour())
        .map_err(|_| BookingError::Validation(format!("invalid timestamp: {}", timestamp)))
}
